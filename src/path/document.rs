//! Document path type

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::collection::CollectionPath;
use super::errors::{PathError, PathResult};
use super::segment;

/// Full address of one document: alternating collection-name / document-id
/// segments, always ending in a document id.
///
/// Invariants, enforced at construction:
/// - segment count is even and non-zero
/// - no segment is blank
///
/// The string form (`Display`, [`DocumentPath::to_string`]) exists only for
/// the store-client boundary; all hierarchy math works on segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentPath {
    segments: Vec<String>,
}

impl DocumentPath {
    /// Parse a raw slash-separated path, e.g. `users/u1/orders/o1`.
    pub fn parse(raw: &str) -> PathResult<Self> {
        let segments = segment::split(raw)?;
        if segments.len() % 2 != 0 {
            return Err(PathError::Malformed {
                path: raw.to_string(),
                reason: "document paths have an even number of segments",
            });
        }
        Ok(Self { segments })
    }

    /// Build from already-validated segments. Callers guarantee parity.
    pub(super) fn from_segments(segments: Vec<String>) -> Self {
        debug_assert!(!segments.is_empty() && segments.len() % 2 == 0);
        Self { segments }
    }

    /// Validated segments, alternating collection name / document id.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of collection/id pairs from the root.
    pub fn depth(&self) -> usize {
        self.segments.len() / 2
    }

    /// The document id (final segment).
    pub fn id(&self) -> &str {
        &self.segments[self.segments.len() - 1]
    }

    /// Name of the collection that directly owns this document.
    pub fn collection_name(&self) -> &str {
        &self.segments[self.segments.len() - 2]
    }

    /// Derive the path of a sub-collection nested under this document.
    ///
    /// Blank names are rejected with [`PathError::InvalidCollectionName`];
    /// no normalization is attempted.
    pub fn child_collection(&self, name: &str) -> PathResult<CollectionPath> {
        segment::validate_collection_name(name)?;
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Ok(CollectionPath::from_segments(segments))
    }

    /// Climb to the parent *document*, skipping the collection that owns this
    /// one: `users/u1/orders/o1` -> `users/u1`.
    ///
    /// Fails with [`PathError::Root`] when the document sits in a top-level
    /// collection and has no document-level ancestor.
    pub fn parent_document(&self) -> PathResult<DocumentPath> {
        if self.segments.len() < 4 {
            return Err(PathError::Root(self.to_string()));
        }
        Ok(Self {
            segments: self.segments[..self.segments.len() - 2].to_vec(),
        })
    }

    /// True when `self` addresses a document strictly above `other`.
    ///
    /// Ancestry is a proper-prefix relation on segment boundaries.
    pub fn is_ancestor_of(&self, other: &DocumentPath) -> bool {
        self.segments.len() < other.segments.len()
            && other.segments[..self.segments.len()] == self.segments[..]
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

// Paths cross service boundaries in their string form.
impl Serialize for DocumentPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DocumentPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

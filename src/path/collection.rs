//! Collection path type

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::document::DocumentPath;
use super::errors::{PathError, PathResult};
use super::segment;

/// Address of one collection: alternating segments ending in a collection
/// name, so the segment count is always odd. A single segment addresses a
/// top-level collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollectionPath {
    segments: Vec<String>,
}

impl CollectionPath {
    /// Parse a raw slash-separated collection path, e.g. `users/u1/orders`.
    pub fn parse(raw: &str) -> PathResult<Self> {
        let segments = segment::split(raw)?;
        if segments.len() % 2 == 0 {
            return Err(PathError::Malformed {
                path: raw.to_string(),
                reason: "collection paths have an odd number of segments",
            });
        }
        Ok(Self { segments })
    }

    /// A top-level collection.
    pub fn root(name: &str) -> PathResult<Self> {
        segment::validate_collection_name(name)?;
        Ok(Self {
            segments: vec![name.to_string()],
        })
    }

    /// Build from already-validated segments. Callers guarantee parity.
    pub(super) fn from_segments(segments: Vec<String>) -> Self {
        debug_assert!(segments.len() % 2 == 1);
        Self { segments }
    }

    /// Validated segments.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The collection name (final segment).
    pub fn name(&self) -> &str {
        &self.segments[self.segments.len() - 1]
    }

    /// Address a document inside this collection.
    pub fn doc(&self, id: &str) -> PathResult<DocumentPath> {
        segment::validate_document_id(id)?;
        let mut segments = self.segments.clone();
        segments.push(id.to_string());
        Ok(DocumentPath::from_segments(segments))
    }

    /// The document this collection is nested under, if any.
    pub fn parent_document(&self) -> Option<DocumentPath> {
        if self.segments.len() < 2 {
            return None;
        }
        Some(DocumentPath::from_segments(
            self.segments[..self.segments.len() - 1].to_vec(),
        ))
    }
}

impl fmt::Display for CollectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

impl Serialize for CollectionPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CollectionPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

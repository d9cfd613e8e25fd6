//! Segment-level validation shared by both path types.

use super::errors::{PathError, PathResult};

/// Split a raw path string into validated segments.
pub(super) fn split(raw: &str) -> PathResult<Vec<String>> {
    if raw.is_empty() {
        return Err(PathError::Malformed {
            path: raw.to_string(),
            reason: "path is empty",
        });
    }

    let mut segments = Vec::new();
    for segment in raw.split('/') {
        if segment.trim().is_empty() {
            return Err(PathError::Malformed {
                path: raw.to_string(),
                reason: "path contains an empty segment",
            });
        }
        segments.push(segment.to_string());
    }
    Ok(segments)
}

/// Validate a single collection name before it is appended to a path.
pub(super) fn validate_collection_name(name: &str) -> PathResult<()> {
    if name.trim().is_empty() || name.contains('/') {
        return Err(PathError::InvalidCollectionName(name.to_string()));
    }
    Ok(())
}

/// Validate a single document id before it is appended to a path.
pub(super) fn validate_document_id(id: &str) -> PathResult<()> {
    if id.trim().is_empty() || id.contains('/') {
        return Err(PathError::Malformed {
            path: id.to_string(),
            reason: "document id is blank or contains a separator",
        });
    }
    Ok(())
}

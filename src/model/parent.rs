//! Parent link state machine

use super::model_type::ModelType;
use super::record::Record;

/// Lazily resolved link from a record to its owning document's record.
///
/// State machine: `Unset -> Pending -> Resolved`. The `Pending -> Resolved`
/// transition happens at most once, on the first resolution, and is never
/// reversed; `Unset` and `Resolved` are the two no-I/O states.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ParentLink {
    /// No parent: a top-level record (valid terminal state)
    #[default]
    Unset,
    /// Declared parent type, resolved on demand by walking the path
    Pending(&'static ModelType),
    /// Concrete owning record, authoritative once present
    Resolved(Box<Record>),
}

impl ParentLink {
    /// True when no parent is declared.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// True when resolution would require a store fetch.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// True once a concrete instance is held.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// The cached parent record, if resolved.
    pub fn resolved(&self) -> Option<&Record> {
        match self {
            Self::Resolved(record) => Some(record),
            _ => None,
        }
    }

    /// The declared parent type, if still pending.
    pub fn pending(&self) -> Option<&'static ModelType> {
        match self {
            Self::Pending(model) => Some(model),
            _ => None,
        }
    }
}

//! Hierarchy management
//!
//! Resolves the parent/child relationships implied by the path tree:
//! building sub-collection records under an owner, validating declared
//! parent links, and resolving a pending parent lazily (one store fetch,
//! cached for the record's lifetime).

mod errors;
mod manager;

pub use errors::{HierarchyError, HierarchyResult};
pub use manager::{HierarchyManager, ParentRef};

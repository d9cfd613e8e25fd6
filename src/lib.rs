//! doctree - typed record mapping over a hierarchical collection/document store
//!
//! Derives and tracks document paths, resolves the parent links implied by
//! the path tree, casts typed attributes to and from the store's native
//! representation, and deletes document subtrees recursively, leaves first.

pub mod cast;
pub mod delete;
pub mod hierarchy;
pub mod model;
pub mod path;
pub mod store;

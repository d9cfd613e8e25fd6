//! Document path model
//!
//! A document store address is an alternating sequence of collection-name and
//! document-id segments: `users/u1/orders/o1`. Document paths have an even
//! segment count and end in an id; collection paths have an odd segment count
//! and end in a collection name.
//!
//! Path math is pure segment manipulation and never talks to the store, so
//! hierarchy invariants are testable without a backend.

mod collection;
mod document;
mod errors;
mod segment;

pub use collection::CollectionPath;
pub use document::DocumentPath;
pub use errors::{PathError, PathResult};

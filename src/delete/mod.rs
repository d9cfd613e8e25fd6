//! Recursive subtree deletion
//!
//! The store offers no cascade-delete primitive, so removing a document means
//! walking every sub-collection beneath it and deleting descendants strictly
//! before ancestors. [`RecursiveDeleter`] drives that walk with an explicit
//! work-stack, so arbitrarily deep trees cannot exhaust the call stack.

mod deleter;

pub use deleter::{RecursiveDeleter, DEFAULT_BATCH_SIZE};

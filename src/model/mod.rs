//! Records and model descriptors
//!
//! A [`Record`] is a typed entity addressed by a document path: a string id,
//! a typed attribute map, the store-native map it was last synced with, and a
//! lazily resolved [`ParentLink`]. Each record type is described by a static
//! [`ModelType`] carrying its default collection name, declared parent type,
//! and immutable cast registry.
//!
//! Persistence glue lives on the record itself: `insert` / `update` / `save`
//! run the cast pipeline and talk to the store client, `delete` runs the
//! recursive deleter before clearing the record's own bookkeeping, and
//! `from_snapshot` hydrates from a store read.

mod errors;
mod model_type;
mod parent;
mod record;

pub use errors::{RecordError, RecordResult};
pub use model_type::{no_casts, ModelType, TypeRegistry};
pub use parent::ParentLink;
pub use record::Record;

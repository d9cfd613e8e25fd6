//! Attribute casting
//!
//! Bridges typed in-memory attribute values and the store's native
//! representation. Each attribute may carry a [`CastRule`]: an ordinary
//! coercion ([`CastKind`]) plus an optional custom [`AttributeSerializer`]
//! with `to_store` / `from_store` transforms. Rules live in a per-record-type
//! [`CastRegistry`], built once and immutable afterwards.
//!
//! [`AttributeCastPipeline`] applies a registry to a full attribute map. Both
//! write call-sites (fresh inserts and dirty-diff updates) run through it, so
//! a custom serializer's output, not the raw typed value, is what gets
//! compared and transmitted.

mod errors;
mod pipeline;
mod registry;
mod rule;
mod value;

pub use errors::{CastError, CastResult};
pub use pipeline::AttributeCastPipeline;
pub use registry::CastRegistry;
pub use rule::{AttributeSerializer, CastKind, CastRule};
pub use value::{AttrValue, AttributeMap, ValueObject};

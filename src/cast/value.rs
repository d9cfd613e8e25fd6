//! Typed attribute values

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Typed attribute map of one record.
pub type AttributeMap = BTreeMap<String, AttrValue>;

/// A structured value object that knows how to flatten itself into the
/// store's plain representation.
///
/// Custom casters typically hydrate attributes into value objects (money,
/// coordinates, ...); the write pipeline flattens whatever is left as an
/// object before it reaches the store.
pub trait ValueObject: fmt::Debug + Send + Sync {
    /// Convert to the store-native plain structure.
    fn to_plain(&self) -> Value;
}

/// One typed in-memory attribute value.
#[derive(Debug, Clone)]
pub enum AttrValue {
    /// Already store-shaped
    Plain(Value),
    /// Structured value object, flattened at the store boundary
    Object(Arc<dyn ValueObject>),
}

impl AttrValue {
    /// Wrap a plain value.
    pub fn plain(value: impl Into<Value>) -> Self {
        Self::Plain(value.into())
    }

    /// Wrap a value object.
    pub fn object(object: impl ValueObject + 'static) -> Self {
        Self::Object(Arc::new(object))
    }

    /// The store-shaped form: plain values as-is, objects flattened.
    pub fn as_plain(&self) -> Value {
        match self {
            Self::Plain(value) => value.clone(),
            Self::Object(object) => object.to_plain(),
        }
    }

    /// Borrow the plain value, if this is not a value object.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Plain(value) => Some(value),
            Self::Object(_) => None,
        }
    }

    /// True for the object variant.
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }
}

impl PartialEq for AttrValue {
    fn eq(&self, other: &Self) -> bool {
        self.as_plain() == other.as_plain()
    }
}

impl From<Value> for AttrValue {
    fn from(value: Value) -> Self {
        Self::Plain(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Plain(Value::String(value.to_string()))
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Plain(Value::String(value))
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Plain(Value::from(value))
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Plain(Value::from(value))
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Plain(Value::Bool(value))
    }
}

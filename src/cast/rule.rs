//! Cast rules and ordinary type coercion

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde_json::Value;

use super::errors::{CastError, CastResult};
use super::value::{AttrValue, AttributeMap};

/// Custom bidirectional transform for one attribute.
///
/// Presence of a serializer is what makes an attribute "serializable": its
/// `to_store` output replaces the coerced value on every write, and its
/// `from_store` output is what hydration places on the record.
pub trait AttributeSerializer: Send + Sync {
    /// Produce the store-native value for `value`.
    ///
    /// `attributes` is the record's full typed attribute map, for serializers
    /// that derive their output from more than one attribute.
    fn to_store(&self, key: &str, value: &AttrValue, attributes: &AttributeMap)
        -> CastResult<Value>;

    /// Rebuild the typed value from its store representation.
    fn from_store(&self, key: &str, value: &Value) -> CastResult<AttrValue>;
}

/// Ordinary coercion target for an attribute, applied before any custom
/// serializer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastKind {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Int,
    /// Boolean
    Bool,
    /// 64-bit floating point
    Float,
    /// RFC 3339 timestamp, normalized to UTC
    Timestamp,
}

impl CastKind {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CastKind::String => "string",
            CastKind::Int => "int",
            CastKind::Bool => "bool",
            CastKind::Float => "float",
            CastKind::Timestamp => "timestamp",
        }
    }

    /// Coerce `value` to this kind. Null passes through untouched.
    pub fn coerce(&self, key: &str, value: Value) -> CastResult<Value> {
        if value.is_null() {
            return Ok(value);
        }

        let coerced = match self {
            CastKind::String => match value {
                Value::String(s) => Some(Value::String(s)),
                Value::Number(n) => Some(Value::String(n.to_string())),
                Value::Bool(b) => Some(Value::String(b.to_string())),
                _ => None,
            },
            CastKind::Int => match &value {
                Value::Number(n) => n
                    .as_i64()
                    .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
                    .map(Value::from),
                Value::String(s) => s.parse::<i64>().ok().map(Value::from),
                Value::Bool(b) => Some(Value::from(*b as i64)),
                _ => None,
            },
            CastKind::Float => match &value {
                Value::Number(n) => n.as_f64().map(Value::from),
                Value::String(s) => s.parse::<f64>().ok().map(Value::from),
                _ => None,
            },
            CastKind::Bool => match &value {
                Value::Bool(b) => Some(Value::Bool(*b)),
                Value::Number(n) => match n.as_i64() {
                    Some(0) => Some(Value::Bool(false)),
                    Some(1) => Some(Value::Bool(true)),
                    _ => None,
                },
                Value::String(s) => match s.as_str() {
                    "true" => Some(Value::Bool(true)),
                    "false" => Some(Value::Bool(false)),
                    _ => None,
                },
                _ => None,
            },
            CastKind::Timestamp => match &value {
                Value::String(s) => DateTime::parse_from_rfc3339(s)
                    .ok()
                    .map(|dt| rfc3339(dt.with_timezone(&Utc))),
                Value::Number(n) => n
                    .as_i64()
                    .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
                    .map(rfc3339),
                _ => None,
            },
        };

        coerced.ok_or(CastError::Coercion {
            key: key.to_string(),
            expected: self.type_name(),
        })
    }
}

fn rfc3339(dt: DateTime<Utc>) -> Value {
    Value::String(dt.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// Cast configuration for one attribute: the ordinary coercion plus an
/// optional custom serializer.
#[derive(Clone)]
pub struct CastRule {
    kind: CastKind,
    serializer: Option<Arc<dyn AttributeSerializer>>,
}

impl CastRule {
    /// Ordinary coercion only.
    pub fn new(kind: CastKind) -> Self {
        Self {
            kind,
            serializer: None,
        }
    }

    /// Coercion plus a custom serializer.
    pub fn with_serializer(kind: CastKind, serializer: impl AttributeSerializer + 'static) -> Self {
        Self {
            kind,
            serializer: Some(Arc::new(serializer)),
        }
    }

    /// The ordinary coercion target.
    pub fn kind(&self) -> CastKind {
        self.kind
    }

    /// The custom serializer, if the attribute has one.
    pub fn serializer(&self) -> Option<&dyn AttributeSerializer> {
        self.serializer.as_deref()
    }
}

impl fmt::Debug for CastRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CastRule")
            .field("kind", &self.kind)
            .field("serializer", &self.serializer.is_some())
            .finish()
    }
}

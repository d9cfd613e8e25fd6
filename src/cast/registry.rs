//! Per-record-type cast registry

use std::collections::BTreeMap;

use super::rule::CastRule;

/// Immutable mapping from attribute name to its cast rule.
///
/// One registry exists per record type, built once at startup (typically
/// behind a `Lazy` static on the model descriptor) and never mutated after,
/// so rules cannot leak across record types.
#[derive(Debug, Clone, Default)]
pub struct CastRegistry {
    rules: BTreeMap<String, CastRule>,
}

impl CastRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style rule registration.
    pub fn with(mut self, key: impl Into<String>, rule: CastRule) -> Self {
        self.rules.insert(key.into(), rule);
        self
    }

    /// The rule for `key`, if one is declared.
    pub fn get(&self, key: &str) -> Option<&CastRule> {
        self.rules.get(key)
    }

    /// Iterate declared rules in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CastRule)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of declared rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no rules are declared.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

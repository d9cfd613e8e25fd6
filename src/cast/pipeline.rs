//! Attribute cast pipeline
//!
//! The single translation point between typed attribute maps and store-native
//! maps. Every write path (insert and dirty-diff update) must go through
//! [`AttributeCastPipeline::to_store_representation`] so the store only ever
//! sees serialized forms.

use crate::store::StoreMap;

use super::errors::CastResult;
use super::registry::CastRegistry;
use super::value::{AttrValue, AttributeMap};

/// Applies a [`CastRegistry`] to a full attribute map.
pub struct AttributeCastPipeline;

impl AttributeCastPipeline {
    /// Translate typed attributes into the store-native map.
    ///
    /// Per attribute, in order: ordinary coercion by the rule's kind, then
    /// the custom serializer if the rule has one, then flattening of any
    /// remaining value object. Attributes without a declared rule pass
    /// through (flattened if they are value objects). Keys absent from
    /// `attributes` never appear in the output.
    ///
    /// A failing serializer propagates immediately, naming the key.
    pub fn to_store_representation(
        attributes: &AttributeMap,
        registry: &CastRegistry,
    ) -> CastResult<StoreMap> {
        let mut out = StoreMap::new();

        for (key, value) in attributes {
            let rule = match registry.get(key) {
                Some(rule) => rule,
                None => {
                    out.insert(key.clone(), value.as_plain());
                    continue;
                }
            };

            // Value objects skip scalar coercion; they either go through the
            // custom serializer or get flattened below.
            let coerced = match value {
                AttrValue::Plain(plain) => AttrValue::Plain(rule.kind().coerce(key, plain.clone())?),
                AttrValue::Object(_) => value.clone(),
            };

            let stored = match rule.serializer() {
                Some(serializer) => serializer.to_store(key, &coerced, attributes)?,
                None => coerced.as_plain(),
            };

            out.insert(key.clone(), stored);
        }

        Ok(out)
    }

    /// Rebuild typed attributes from a store-native map (hydration).
    ///
    /// Keys with a custom serializer go through `from_store`; everything else
    /// is kept plain.
    pub fn from_store_representation(
        fields: &StoreMap,
        registry: &CastRegistry,
    ) -> CastResult<AttributeMap> {
        let mut out = AttributeMap::new();

        for (key, value) in fields {
            let typed = match registry.get(key).and_then(|rule| rule.serializer()) {
                Some(serializer) => serializer.from_store(key, value)?,
                None => AttrValue::Plain(value.clone()),
            };
            out.insert(key.clone(), typed);
        }

        Ok(out)
    }
}

//! Static model descriptors and the type registry

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::cast::CastRegistry;

/// Cast accessor for model types with no declared rules.
pub fn no_casts() -> &'static CastRegistry {
    static EMPTY: Lazy<CastRegistry> = Lazy::new(CastRegistry::new);
    &EMPTY
}

/// Static descriptor for one record type.
///
/// Declared once per type (as a `static`) and referenced everywhere by
/// `&'static` pointer; two descriptors are the same type only if they are the
/// same static.
#[derive(Debug)]
pub struct ModelType {
    /// Stable type name, used for registry lookup and diagnostics
    pub name: &'static str,
    /// Default collection name for top-level instances
    pub collection: &'static str,
    /// Declared parent record type, if instances live under one
    pub parent: Option<&'static ModelType>,
    /// Accessor for the type's immutable cast registry, built once
    pub casts: fn() -> &'static CastRegistry,
}

impl ModelType {
    /// The type's cast registry.
    pub fn cast_registry(&self) -> &'static CastRegistry {
        (self.casts)()
    }

    /// Identity comparison; descriptors are statics.
    pub fn is(&self, other: &ModelType) -> bool {
        std::ptr::eq(self, other)
    }

    /// True when `self` is the declared parent type of `child`.
    pub fn is_ancestor_type_of(&self, child: &ModelType) -> bool {
        child.parent.map_or(false, |declared| declared.is(self))
    }
}

impl PartialEq for ModelType {
    fn eq(&self, other: &Self) -> bool {
        self.is(other)
    }
}

impl Eq for ModelType {}

/// Registry of the record types known to a hierarchy manager.
///
/// Parent links may only name registered types; anything else is a
/// configuration bug surfaced as an invalid-parent error.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: BTreeMap<&'static str, &'static ModelType>,
}

impl TypeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration.
    pub fn with(mut self, model: &'static ModelType) -> Self {
        self.register(model);
        self
    }

    /// Register a model type under its stable name.
    pub fn register(&mut self, model: &'static ModelType) {
        self.types.insert(model.name, model);
    }

    /// Look up a type by name.
    pub fn get(&self, name: &str) -> Option<&'static ModelType> {
        self.types.get(name).copied()
    }

    /// True when exactly this descriptor is registered.
    pub fn is_registered(&self, model: &ModelType) -> bool {
        self.types
            .get(model.name)
            .map_or(false, |registered| std::ptr::eq(*registered, model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static USER: ModelType = ModelType {
        name: "User",
        collection: "users",
        parent: None,
        casts: no_casts,
    };

    static ORDER: ModelType = ModelType {
        name: "Order",
        collection: "orders",
        parent: Some(&USER),
        casts: no_casts,
    };

    #[test]
    fn test_ancestor_type_check() {
        assert!(USER.is_ancestor_type_of(&ORDER));
        assert!(!ORDER.is_ancestor_type_of(&USER));
        assert!(!USER.is_ancestor_type_of(&USER));
    }

    #[test]
    fn test_registry_identity() {
        let registry = TypeRegistry::new().with(&USER).with(&ORDER);

        assert!(registry.is_registered(&USER));
        assert_eq!(registry.get("Order").unwrap().collection, "orders");
        assert!(registry.get("Course").is_none());
    }
}

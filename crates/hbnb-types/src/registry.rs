//! Class registry: which class names exist and how to construct them.
//!
//! The registry is built once at process start and passed to whatever needs
//! it. A second table maps well-known attribute names to the scalar kind they
//! are expected to hold; it is a hint only and never changes stored values.

use std::collections::BTreeMap;

use crate::instance::Instance;
use crate::value::{AttrValue, ScalarKind};

/// Class names registered by [`ClassRegistry::standard`], in order.
const STANDARD_CLASSES: &[&str] = &[
    "BaseModel",
    "User",
    "Place",
    "State",
    "City",
    "Amenity",
    "Review",
];

/// Expected kinds of well-known attributes.
const STANDARD_HINTS: &[(&str, ScalarKind)] = &[
    ("number_rooms", ScalarKind::Int),
    ("number_bathrooms", ScalarKind::Int),
    ("max_guest", ScalarKind::Int),
    ("price_by_night", ScalarKind::Int),
    ("latitude", ScalarKind::Float),
    ("longitude", ScalarKind::Float),
];

/// A registered class: its name and the ability to construct instances.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassDescriptor {
    name: String,
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Construct a new instance with a fresh id and timestamps, then apply
    /// `attributes` in order. Reserved names are dropped.
    pub fn construct<I>(&self, attributes: I) -> Instance
    where
        I: IntoIterator<Item = (String, AttrValue)>,
    {
        let mut instance = Instance::new(self.name.clone());
        for (name, value) in attributes {
            instance.set(name, value);
        }
        instance
    }
}

/// Fixed mapping from class names to [`ClassDescriptor`]s plus the
/// attribute kind hints.
#[derive(Clone, Debug, Default)]
pub struct ClassRegistry {
    classes: Vec<ClassDescriptor>,
    hints: BTreeMap<String, ScalarKind>,
}

impl ClassRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The seven standard classes and the standard hint table.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for name in STANDARD_CLASSES {
            registry.register(*name);
        }
        for (attr, kind) in STANDARD_HINTS {
            registry.hint(*attr, *kind);
        }
        registry
    }

    /// Register a class. Registering an existing name is a no-op.
    pub fn register(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        if !self.contains(&name) {
            self.classes.push(ClassDescriptor::new(name));
        }
        self
    }

    /// Record the expected kind of an attribute name.
    pub fn hint(&mut self, attribute: impl Into<String>, kind: ScalarKind) -> &mut Self {
        self.hints.insert(attribute.into(), kind);
        self
    }

    /// Look up a class by exact name.
    pub fn resolve(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Registered class names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Expected kind of a well-known attribute, if any.
    pub fn attribute_kind(&self, attribute: &str) -> Option<ScalarKind> {
        self.hints.get(attribute).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_has_seven_classes_in_order() {
        let registry = ClassRegistry::standard();
        assert_eq!(registry.len(), 7);
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names[0], "BaseModel");
        assert_eq!(names[6], "Review");
    }

    #[test]
    fn resolve_is_exact_and_case_sensitive() {
        let registry = ClassRegistry::standard();
        assert!(registry.resolve("User").is_some());
        assert!(registry.resolve("user").is_none());
        assert!(registry.resolve("MyModel").is_none());
        assert!(registry.resolve("").is_none());
    }

    #[test]
    fn register_is_idempotent() {
        let mut registry = ClassRegistry::new();
        registry.register("Thing").register("Thing");
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }

    #[test]
    fn construct_applies_attributes_and_drops_reserved() {
        let registry = ClassRegistry::standard();
        let place = registry.resolve("Place").unwrap();
        let inst = place.construct(vec![
            ("name".to_string(), AttrValue::from("Loft")),
            ("id".to_string(), AttrValue::from("forced")),
            ("max_guest".to_string(), AttrValue::Int(4)),
        ]);
        assert_eq!(inst.class(), "Place");
        assert_ne!(inst.id(), "forced");
        assert_eq!(inst.get("name"), Some(&AttrValue::from("Loft")));
        assert_eq!(inst.get("max_guest"), Some(&AttrValue::Int(4)));
        assert_eq!(inst.attributes().len(), 2);
    }

    #[test]
    fn construct_yields_distinct_ids() {
        let registry = ClassRegistry::standard();
        let user = registry.resolve("User").unwrap();
        let a = user.construct(Vec::new());
        let b = user.construct(Vec::new());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn attribute_hints() {
        let registry = ClassRegistry::standard();
        assert_eq!(registry.attribute_kind("price_by_night"), Some(ScalarKind::Int));
        assert_eq!(registry.attribute_kind("latitude"), Some(ScalarKind::Float));
        assert_eq!(registry.attribute_kind("name"), None);
    }
}

use std::collections::BTreeMap;

use hbnb_types::{Instance, ObjectKey};

use crate::error::StoreResult;

/// Every stored object, keyed by identity key in ascending order.
pub type Objects = BTreeMap<ObjectKey, Instance>;

/// Persistence contract the command dispatcher depends on.
///
/// All implementations must satisfy these invariants:
/// - `all()` reflects every `insert`/`delete`/`get_mut` change immediately.
/// - Iteration order is ascending key order and survives `save` + `reload`.
/// - `save()` durably persists the current mapping or returns an error.
/// - The store is owned by a single mutator; no internal locking.
pub trait ObjectStore {
    /// Live view of every stored object.
    fn all(&self) -> &Objects;

    /// Mutable access to one object.
    fn get_mut(&mut self, key: &ObjectKey) -> Option<&mut Instance>;

    /// Add an object under its own key, replacing any object with the same
    /// key.
    fn insert(&mut self, instance: Instance);

    /// Remove an object. Returns it if it existed.
    fn delete(&mut self, key: &ObjectKey) -> Option<Instance>;

    /// Durably persist the current mapping.
    fn save(&mut self) -> StoreResult<()>;

    /// Replace the in-memory mapping with the durable state.
    fn reload(&mut self) -> StoreResult<()>;

    /// Look up one object.
    fn get(&self, key: &ObjectKey) -> Option<&Instance> {
        self.all().get(key)
    }

    /// Returns `true` if an object is stored under `key`.
    fn contains(&self, key: &ObjectKey) -> bool {
        self.all().contains_key(key)
    }

    /// Objects of one class, in store order.
    fn of_class<'a>(&'a self, class: &'a str) -> Box<dyn Iterator<Item = &'a Instance> + 'a> {
        Box::new(
            self.all()
                .iter()
                .filter(move |(key, _)| key.is_class(class))
                .map(|(_, inst)| inst),
        )
    }

    /// Number of objects of one class.
    fn count(&self, class: &str) -> usize {
        self.all().keys().filter(|key| key.is_class(class)).count()
    }
}

use hbnb_types::{Instance, ObjectKey};

use crate::error::StoreResult;
use crate::traits::{ObjectStore, Objects};

/// In-memory object store.
///
/// Intended for tests and throwaway sessions. `save` and `reload` touch no
/// durable medium; `save` only counts flushes so callers can verify that
/// every mutation was followed by one.
#[derive(Default)]
pub struct InMemoryObjectStore {
    objects: Objects,
    flushes: usize,
}

impl InMemoryObjectStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of objects currently stored.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Number of times `save` has been called.
    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    /// Remove all objects from the store.
    pub fn clear(&mut self) {
        self.objects.clear();
    }
}

impl ObjectStore for InMemoryObjectStore {
    fn all(&self) -> &Objects {
        &self.objects
    }

    fn get_mut(&mut self, key: &ObjectKey) -> Option<&mut Instance> {
        self.objects.get_mut(key)
    }

    fn insert(&mut self, instance: Instance) {
        self.objects.insert(instance.key(), instance);
    }

    fn delete(&mut self, key: &ObjectKey) -> Option<Instance> {
        self.objects.remove(key)
    }

    fn save(&mut self) -> StoreResult<()> {
        self.flushes += 1;
        Ok(())
    }

    fn reload(&mut self) -> StoreResult<()> {
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryObjectStore")
            .field("object_count", &self.len())
            .field("flushes", &self.flushes)
            .finish()
    }
}

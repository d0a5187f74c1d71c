use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use hbnb_types::{ClassRegistry, Instance, ObjectKey};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::{ObjectStore, Objects};

/// Default storage file name, relative to the working directory.
pub const DEFAULT_STORAGE_FILE: &str = "file.json";

/// Object store mirrored to a single JSON file.
///
/// On-disk format: one JSON object mapping each identity key to the
/// instance's persisted form:
///
/// ```text
/// {
///   "User.1f0c...": {"__class__": "User", "id": "1f0c...", "created_at": "...", ...},
///   ...
/// }
/// ```
///
/// `save` writes the whole mapping to a temporary file next to the target
/// and renames it into place, so a crash mid-write leaves the previous
/// state intact.
pub struct FileStorage {
    path: PathBuf,
    registry: ClassRegistry,
    objects: Objects,
}

impl FileStorage {
    /// Create a storage bound to `path` without reading it.
    pub fn new(path: impl Into<PathBuf>, registry: ClassRegistry) -> Self {
        Self {
            path: path.into(),
            registry,
            objects: Objects::new(),
        }
    }

    /// Create a storage bound to `path` and load whatever it holds.
    ///
    /// A missing file yields an empty store.
    pub fn open(path: impl Into<PathBuf>, registry: ClassRegistry) -> StoreResult<Self> {
        let mut storage = Self::new(path, registry);
        storage.reload()?;
        Ok(storage)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn decode(&self, text: &str) -> StoreResult<Objects> {
        let mut objects = Objects::new();
        if text.trim().is_empty() {
            return Ok(objects);
        }

        let root: Value = serde_json::from_str(text).map_err(|e| StoreError::MalformedFile {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        let Value::Object(records) = root else {
            return Err(StoreError::MalformedFile {
                path: self.path.clone(),
                reason: "top-level value is not an object".into(),
            });
        };

        for (raw_key, record) in &records {
            let corrupt = |reason: String| StoreError::CorruptRecord {
                key: raw_key.clone(),
                reason,
            };
            let key: ObjectKey = raw_key.parse().map_err(|e| corrupt(format!("{e}")))?;
            let Value::Object(dict) = record else {
                return Err(corrupt("record is not an object".into()));
            };
            let instance = Instance::from_dict(dict).map_err(|e| corrupt(e.to_string()))?;
            if !self.registry.contains(instance.class()) {
                return Err(corrupt(format!("class not registered: {}", instance.class())));
            }
            if instance.key() != key {
                return Err(corrupt(format!(
                    "record identity {} does not match its key",
                    instance.key()
                )));
            }
            objects.insert(key, instance);
        }
        Ok(objects)
    }

    fn encode(&self) -> StoreResult<String> {
        let records: Map<String, Value> = self
            .objects
            .iter()
            .map(|(key, inst)| (key.to_string(), Value::Object(inst.to_dict())))
            .collect();
        serde_json::to_string_pretty(&Value::Object(records))
            .map_err(|e| StoreError::Serialization(e.to_string()))
    }
}

impl ObjectStore for FileStorage {
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
        let payload = self.encode()?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
        tmp.write_all(payload.as_bytes())?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;

        debug!(path = %self.path.display(), objects = self.objects.len(), "storage saved");
        Ok(())
    }

    fn reload(&mut self) -> StoreResult<()> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no storage file; starting empty");
                self.objects.clear();
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        self.objects = self.decode(&text)?;
        debug!(path = %self.path.display(), objects = self.objects.len(), "storage reloaded");
        Ok(())
    }
}

impl std::fmt::Debug for FileStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStorage")
            .field("path", &self.path)
            .field("object_count", &self.objects.len())
            .finish()
    }
}

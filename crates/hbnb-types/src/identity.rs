use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Generate a fresh instance id (UUID v4, hyphenated lowercase).
pub fn new_instance_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Identity key of a stored object: `"<ClassName>.<id>"`.
///
/// Keys are unique across the whole store. The class segment is everything
/// before the first `.`; the id segment may itself contain dots.
///
/// Keys order as plain strings, which is the store's iteration order.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Build a key from a class name and an instance id.
    pub fn new(class: &str, id: &str) -> Self {
        Self(format!("{class}.{id}"))
    }

    /// The class segment.
    pub fn class(&self) -> &str {
        self.split().0
    }

    /// The id segment.
    pub fn id(&self) -> &str {
        self.split().1
    }

    /// Returns `true` if this key belongs to `class`.
    pub fn is_class(&self, class: &str) -> bool {
        self.class() == class
    }

    /// The full key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn split(&self) -> (&str, &str) {
        // Constructors guarantee a '.' is present.
        self.0.split_once('.').unwrap_or((self.0.as_str(), ""))
    }
}

impl FromStr for ObjectKey {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('.') {
            Some((class, _)) if !class.is_empty() => Ok(Self(s.to_string())),
            _ => Err(TypeError::InvalidKey(s.to_string())),
        }
    }
}

impl TryFrom<String> for ObjectKey {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ObjectKey> for String {
    fn from(key: ObjectKey) -> Self {
        key.0
    }
}

impl fmt::Debug for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectKey({})", self.0)
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

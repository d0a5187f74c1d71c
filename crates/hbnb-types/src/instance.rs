use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value};

use crate::error::TypeError;
use crate::identity::{new_instance_id, ObjectKey};
use crate::temporal::Timestamp;
use crate::value::{quoted_repr, AttrValue};

/// Dynamically set attributes of an instance, ordered by name.
pub type Attributes = BTreeMap<String, AttrValue>;

/// Attribute names owned by the instance itself. They are never assigned
/// through the attribute map.
pub const RESERVED_ATTRIBUTES: &[&str] = &["id", "created_at", "updated_at", "__class__"];

/// A stored object: class name, identity, timestamps and an open attribute
/// map.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    class: String,
    id: String,
    created_at: Timestamp,
    updated_at: Timestamp,
    attributes: Attributes,
}

impl Instance {
    /// Create a fresh instance of `class` with a new id and
    /// `created_at == updated_at == now`.
    pub fn new(class: impl Into<String>) -> Self {
        let now = Timestamp::now();
        Self {
            class: class.into(),
            id: new_instance_id(),
            created_at: now,
            updated_at: now,
            attributes: Attributes::new(),
        }
    }

    /// Rebuild an instance from already known parts.
    pub fn from_parts(
        class: impl Into<String>,
        id: impl Into<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
        attributes: Attributes,
    ) -> Self {
        Self {
            class: class.into(),
            id: id.into(),
            created_at,
            updated_at,
            attributes,
        }
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// The store key of this instance.
    pub fn key(&self) -> ObjectKey {
        ObjectKey::new(&self.class, &self.id)
    }

    /// Look up a dynamic attribute.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Set a dynamic attribute.
    ///
    /// Returns `false` (and changes nothing) when `name` is reserved.
    pub fn set(&mut self, name: impl Into<String>, value: AttrValue) -> bool {
        let name = name.into();
        if is_reserved(&name) {
            return false;
        }
        self.attributes.insert(name, value);
        true
    }

    /// Refresh `updated_at` to the current time.
    pub fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }

    /// Persisted form: a JSON object with `__class__`, the identity fields
    /// and every dynamic attribute.
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("__class__".into(), Value::String(self.class.clone()));
        map.insert("id".into(), Value::String(self.id.clone()));
        map.insert("created_at".into(), Value::String(self.created_at.to_iso()));
        map.insert("updated_at".into(), Value::String(self.updated_at.to_iso()));
        for (name, value) in &self.attributes {
            let json = serde_json::to_value(value).unwrap_or(Value::Null);
            map.insert(name.clone(), json);
        }
        map
    }

    /// Inverse of [`Self::to_dict`].
    ///
    /// Missing timestamps default to the current time. Non-scalar attribute
    /// values are kept as their JSON text.
    pub fn from_dict(dict: &Map<String, Value>) -> Result<Self, TypeError> {
        let class = string_field(dict, "__class__")?;
        let id = string_field(dict, "id")?;
        let now = Timestamp::now();
        let created_at = optional_timestamp(dict, "created_at")?.unwrap_or(now);
        let updated_at = optional_timestamp(dict, "updated_at")?.unwrap_or(created_at);

        let mut attributes = Attributes::new();
        for (name, value) in dict {
            if is_reserved(name) {
                continue;
            }
            attributes.insert(name.clone(), AttrValue::from_json(value));
        }

        Ok(Self {
            class,
            id,
            created_at,
            updated_at,
            attributes,
        })
    }
}

impl fmt::Display for Instance {
    /// `[<Class>] (<id>) {'id': ..., 'created_at': ..., 'updated_at': ..., <attrs>}`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] ({}) {{'id': {}, 'created_at': {}, 'updated_at': {}",
            self.class,
            self.id,
            quoted_repr(&self.id),
            quoted_repr(&self.created_at.to_iso()),
            quoted_repr(&self.updated_at.to_iso()),
        )?;
        for (name, value) in &self.attributes {
            write!(f, ", {}: {}", quoted_repr(name), value.repr())?;
        }
        f.write_str("}")
    }
}

fn is_reserved(name: &str) -> bool {
    RESERVED_ATTRIBUTES.contains(&name)
}

fn string_field(dict: &Map<String, Value>, field: &'static str) -> Result<String, TypeError> {
    match dict.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(TypeError::WrongFieldType {
            field: field.to_string(),
            expected: "string",
        }),
        None => Err(TypeError::MissingField(field)),
    }
}

fn optional_timestamp(
    dict: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<Timestamp>, TypeError> {
    match dict.get(field) {
        None => Ok(None),
        Some(Value::String(s)) => Timestamp::parse_iso(s).map(Some),
        Some(_) => Err(TypeError::WrongFieldType {
            field: field.to_string(),
            expected: "ISO-8601 string",
        }),
    }
}

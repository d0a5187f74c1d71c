//! Foundation types for the HBNB console.
//!
//! This crate provides the identity, temporal, and value types shared by the
//! object store and the command interpreter. Every other HBNB crate depends
//! on `hbnb-types`.
//!
//! # Key Types
//!
//! - [`ClassRegistry`] -- Fixed mapping from class names to constructors
//! - [`ObjectKey`] -- `"<ClassName>.<id>"` identity key, unique per store
//! - [`Instance`] -- A stored object with an open attribute map
//! - [`AttrValue`] -- Typed scalar attribute value (int, float, string, bool)
//! - [`Timestamp`] -- Microsecond wall-clock timestamp

pub mod error;
pub mod identity;
pub mod instance;
pub mod registry;
pub mod temporal;
pub mod value;

pub use error::TypeError;
pub use identity::{new_instance_id, ObjectKey};
pub use instance::{Attributes, Instance, RESERVED_ATTRIBUTES};
pub use registry::{ClassDescriptor, ClassRegistry};
pub use temporal::Timestamp;
pub use value::{quoted_repr, AttrValue, ScalarKind};

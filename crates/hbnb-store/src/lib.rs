//! Object storage for the HBNB console.
//!
//! The console never holds authoritative object state: every command reads
//! from and writes back through an [`ObjectStore`]. Objects are keyed by
//! [`ObjectKey`](hbnb_types::ObjectKey) (`"<ClassName>.<id>"`).
//!
//! # Storage Backends
//!
//! All backends implement the [`ObjectStore`] trait:
//!
//! - [`InMemoryObjectStore`] -- map-only store for tests and scripting
//! - [`FileStorage`] -- map mirrored to a single JSON file
//!
//! # Design Rules
//!
//! 1. `all()` is a live view: mutations are visible immediately.
//! 2. Iteration order is ascending key order, before and after a reload.
//! 3. `save()` is the only durable step; callers flush after every mutation.
//! 4. Flush errors are propagated, never silently ignored.

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use file::{FileStorage, DEFAULT_STORAGE_FILE};
pub use memory::InMemoryObjectStore;
pub use traits::{ObjectStore, Objects};

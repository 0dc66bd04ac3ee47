//! Ember Core - Scene data model for prim synchronization.
//!
//! This crate provides:
//!
//! - **Prim identity**: `PrimPath`, the stable identifier prims are looked
//!   up by across the authoring and render sides
//! - **Attribute values**: `Value` and `ValueDict`, the typed containers
//!   exchanged between a scene source and its cached prims
//!
//! # Example
//!
//! ```
//! use ember_core::{PrimPath, Value};
//!
//! let path: PrimPath = "/World/Shader1".parse().unwrap();
//! assert_eq!(path.name(), "Shader1");
//!
//! let value = Value::from(5);
//! assert_eq!(value.as_int(), Some(5));
//! ```

pub mod path;
pub mod value;

// Re-export commonly used types
pub use path::{PathError, PrimPath};
pub use value::{Value, ValueDict};

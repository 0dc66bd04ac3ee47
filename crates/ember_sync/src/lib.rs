//! Ember Sync - Dirty-bit change tracking and pull-based prim
//! synchronization.
//!
//! This crate provides:
//!
//! - **Dirty masks**: `DirtyBits`, one bit per cached attribute
//! - **The sync contract**: the `Sprim` trait and its `ImageShader`
//!   implementation
//! - **Collaborator surfaces**: the `SceneSource` query trait with a
//!   retained `Stage` implementation, and the `ChangeTracker`
//! - **The cycle driver**: `RenderIndex`, which owns prims and runs the
//!   per-cycle sync pass
//!
//! # Protocol
//!
//! Authoring edits mark bits with the change tracker. Once per update
//! cycle the render index hands each pending mask to its prim's `sync`,
//! which pulls exactly the stale attributes from the scene source and
//! clears the bits it consumed. Bits the source could not answer stay set
//! and are retried on the next cycle; the cache keeps its last-known-good
//! values in the meantime.
//!
//! # Example
//!
//! ```
//! use ember_core::PrimPath;
//! use ember_sync::{tokens, ImageShader, RenderIndex, Stage};
//!
//! let path = PrimPath::new("/World/Shader1").unwrap();
//!
//! let mut stage = Stage::new();
//! stage.set(&path, tokens::ENABLED, true);
//! stage.set(&path, tokens::PRIORITY, 5);
//! stage.set(&path, tokens::FILE_PATH, "a.exr");
//! stage.set(&path, tokens::CONSTANTS, ember_core::ValueDict::new());
//!
//! let mut index = RenderIndex::new();
//! index.insert(ImageShader::new(path.clone())).unwrap();
//!
//! index.sync_all(&stage);
//! assert_eq!(index.get(&path).unwrap().priority(), 5);
//! ```

pub mod dirty;
pub mod image_shader;
pub mod index;
pub mod source;
pub mod sprim;
pub mod tokens;
pub mod tracker;

// Re-export commonly used types
pub use dirty::DirtyBits;
pub use image_shader::ImageShader;
pub use index::{IndexError, RenderIndex};
pub use source::{SceneSource, Stage};
pub use sprim::Sprim;
pub use tracker::{ChangeTracker, TrackerError};

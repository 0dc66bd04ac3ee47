//! Attribute name tokens for image shader prims.
//!
//! These are the exact attribute names the sync layer passes to
//! [`SceneSource::get`](crate::SceneSource::get), one query per dirty bit.
//! A scene source must answer for these names and no others.

/// Whether the shader is active.
pub const ENABLED: &str = "enabled";

/// Ordering key among image shaders, consumed by the render backend.
pub const PRIORITY: &str = "priority";

/// Resource locator of the shader's image or source file.
pub const FILE_PATH: &str = "filePath";

/// Shader constant overrides, keyed by parameter name.
pub const CONSTANTS: &str = "constants";

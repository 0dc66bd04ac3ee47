//! Prim path identity.
//!
//! Every prim is named by an absolute, `/`-separated path such as
//! `/World/Shader1`. The sync layer treats paths as opaque identifiers:
//! only equality and hashing matter for cache lookups, and path
//! construction is the single place the shape is validated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when constructing a prim path.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PathError {
    #[error("prim path is empty")]
    Empty,

    #[error("prim path '{0}' is not absolute (must start with '/')")]
    NotAbsolute(String),
}

/// An absolute path identifying a prim, e.g. `/World/Shader1`.
///
/// Paths are assigned by the authoring side when a prim is created and
/// never change over the prim's lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrimPath(String);

impl PrimPath {
    /// Create a prim path, validating that it is non-empty and absolute.
    pub fn new(path: impl Into<String>) -> Result<Self, PathError> {
        let path = path.into();
        if path.is_empty() {
            return Err(PathError::Empty);
        }
        if !path.starts_with('/') {
            return Err(PathError::NotAbsolute(path));
        }
        Ok(Self(path))
    }

    /// The full path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last component of the path (the prim's own name).
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or("")
    }

    /// The enclosing path, or `None` for a root-level prim.
    pub fn parent(&self) -> Option<PrimPath> {
        let end = self.0.rfind('/')?;
        if end == 0 {
            // Direct child of the root has no meaningful parent prim.
            return None;
        }
        Some(Self(self.0[..end].to_string()))
    }
}

impl fmt::Display for PrimPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PrimPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

//! Scene source interface and a retained in-memory implementation.
//!
//! The scene source is the authority for authored attribute values. Cached
//! prims never store authored data of their own accord; they pull it from
//! a source during sync, one attribute per dirty bit.

use std::collections::HashMap;

use ember_core::{PrimPath, Value};

/// The authority for authored attribute values.
///
/// Returning `None` is the source-miss signal: the source cannot currently
/// produce the value (the prim was removed, or the attribute has not been
/// authored yet). A miss is not an error at this layer; the caller keeps
/// the matching dirty bit set and retries on a later cycle.
pub trait SceneSource {
    /// The current value of `attribute` on the prim at `path`, or `None`
    /// when the source cannot produce it.
    fn get(&self, path: &PrimPath, attribute: &str) -> Option<Value>;
}

/// A retained, in-memory scene source.
///
/// Holds the authored attributes of each prim. Mutators only touch the
/// authored data; recording which attributes became stale is the caller's
/// job, via [`DirtyBits::for_attribute`](crate::DirtyBits::for_attribute)
/// and [`ChangeTracker::mark_dirty`](crate::ChangeTracker::mark_dirty).
#[derive(Debug, Default)]
pub struct Stage {
    prims: HashMap<PrimPath, HashMap<String, Value>>,
}

impl Stage {
    /// Create an empty stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty prim. Existing authored data at `path` is kept.
    pub fn add_prim(&mut self, path: PrimPath) {
        self.prims.entry(path).or_default();
    }

    /// Remove a prim and all its authored attributes.
    ///
    /// Returns true if the prim existed. Sources that still hold dirty
    /// bits for the removed prim will miss on their next sync and retry.
    pub fn remove_prim(&mut self, path: &PrimPath) -> bool {
        self.prims.remove(path).is_some()
    }

    /// Author `attribute` on the prim at `path`, creating the prim entry
    /// if it does not exist yet.
    pub fn set(&mut self, path: &PrimPath, attribute: &str, value: impl Into<Value>) {
        self.prims
            .entry(path.clone())
            .or_default()
            .insert(attribute.to_string(), value.into());
    }

    /// True if a prim exists at `path`.
    pub fn contains(&self, path: &PrimPath) -> bool {
        self.prims.contains_key(path)
    }

    /// Number of prims on the stage.
    pub fn prim_count(&self) -> usize {
        self.prims.len()
    }
}

impl SceneSource for Stage {
    fn get(&self, path: &PrimPath, attribute: &str) -> Option<Value> {
        self.prims.get(path)?.get(attribute).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens;

    fn shader_path() -> PrimPath {
        PrimPath::new("/World/Shader1").unwrap()
    }

    #[test]
    fn test_set_creates_prim() {
        let mut stage = Stage::new();
        let path = shader_path();

        stage.set(&path, tokens::PRIORITY, 5);
        assert!(stage.contains(&path));
        assert_eq!(stage.prim_count(), 1);
        assert_eq!(stage.get(&path, tokens::PRIORITY), Some(Value::Int(5)));
    }

    #[test]
    fn test_missing_prim_and_attribute_miss() {
        let mut stage = Stage::new();
        let path = shader_path();

        assert_eq!(stage.get(&path, tokens::ENABLED), None);

        stage.add_prim(path.clone());
        assert_eq!(stage.get(&path, tokens::ENABLED), None);

        stage.set(&path, tokens::ENABLED, true);
        assert_eq!(stage.get(&path, tokens::ENABLED), Some(Value::Bool(true)));

        assert!(stage.remove_prim(&path));
        assert!(!stage.remove_prim(&path));
        assert_eq!(stage.get(&path, tokens::ENABLED), None);
    }
}

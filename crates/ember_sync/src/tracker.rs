//! Dirty-state bookkeeping across sync cycles.
//!
//! The change tracker owns the persistent dirty mask of every registered
//! prim. Authoring edits accumulate bits between cycles; the sync pass
//! drains a snapshot of the pending masks and writes back whatever each
//! prim could not consume.

use std::collections::HashMap;

use ember_core::PrimPath;
use thiserror::Error;

use crate::DirtyBits;

/// Errors that can occur during change-tracker bookkeeping.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TrackerError {
    #[error("prim '{0}' is not registered with the change tracker")]
    UnknownPrim(PrimPath),
}

/// Accumulates dirty bits per prim between sync cycles.
#[derive(Debug, Default)]
pub struct ChangeTracker {
    state: HashMap<PrimPath, DirtyBits>,
}

impl ChangeTracker {
    /// Create a tracker with no registered prims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a prim with its initial mask, typically the prim's
    /// [`initial_dirty_bits`](crate::Sprim::initial_dirty_bits).
    ///
    /// Re-registering resets the pending mask to `initial`.
    pub fn register(&mut self, path: PrimPath, initial: DirtyBits) {
        self.state.insert(path, initial);
    }

    /// Drop a prim's bookkeeping. Returns true if it was registered.
    pub fn unregister(&mut self, path: &PrimPath) -> bool {
        self.state.remove(path).is_some()
    }

    /// Accumulate `bits` into the prim's pending mask.
    ///
    /// Errors for prims that were never registered; unlike a source-miss,
    /// a stranded edit has no retry path.
    pub fn mark_dirty(&mut self, path: &PrimPath, bits: DirtyBits) -> Result<(), TrackerError> {
        match self.state.get_mut(path) {
            Some(pending) => {
                *pending |= bits;
                Ok(())
            }
            None => Err(TrackerError::UnknownPrim(path.clone())),
        }
    }

    /// The pending mask for `path`, or `None` if it is not registered.
    pub fn dirty_bits(&self, path: &PrimPath) -> Option<DirtyBits> {
        self.state.get(path).copied()
    }

    /// Store the mask a sync pass handed back for `path`.
    ///
    /// Ignored for prims unregistered mid-cycle.
    pub fn mark_synced(&mut self, path: &PrimPath, remaining: DirtyBits) {
        if let Some(pending) = self.state.get_mut(path) {
            *pending = remaining;
        }
    }

    /// Prims whose pending mask has at least one defined bit set.
    pub fn dirty_prims(&self) -> impl Iterator<Item = (&PrimPath, DirtyBits)> {
        self.state
            .iter()
            .filter(|(_, bits)| !bits.is_clean())
            .map(|(path, bits)| (path, *bits))
    }

    /// True if any registered prim has pending dirty bits.
    pub fn any_dirty(&self) -> bool {
        self.state.values().any(|bits| !bits.is_clean())
    }

    /// Number of registered prims.
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// True if no prims are registered.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shader_path() -> PrimPath {
        PrimPath::new("/World/Shader1").unwrap()
    }

    #[test]
    fn test_register_seeds_pending_mask() {
        let mut tracker = ChangeTracker::new();
        let path = shader_path();

        tracker.register(path.clone(), DirtyBits::all());
        assert_eq!(tracker.dirty_bits(&path), Some(DirtyBits::all()));
        assert!(tracker.any_dirty());

        tracker.mark_synced(&path, DirtyBits::CLEAN);
        assert_eq!(tracker.dirty_bits(&path), Some(DirtyBits::CLEAN));
        assert!(!tracker.any_dirty());
    }

    #[test]
    fn test_mark_dirty_accumulates() {
        let mut tracker = ChangeTracker::new();
        let path = shader_path();
        tracker.register(path.clone(), DirtyBits::CLEAN);

        tracker.mark_dirty(&path, DirtyBits::PRIORITY).unwrap();
        tracker.mark_dirty(&path, DirtyBits::FILE_PATH).unwrap();
        assert_eq!(
            tracker.dirty_bits(&path),
            Some(DirtyBits::PRIORITY | DirtyBits::FILE_PATH)
        );

        let dirty: Vec<_> = tracker.dirty_prims().collect();
        assert_eq!(dirty.len(), 1);
        assert_eq!(dirty[0].0, &path);
    }

    #[test]
    fn test_mark_dirty_on_unregistered_prim_errors() {
        let mut tracker = ChangeTracker::new();
        let path = shader_path();

        let err = tracker.mark_dirty(&path, DirtyBits::ENABLED).unwrap_err();
        assert_eq!(err, TrackerError::UnknownPrim(path.clone()));

        // mark_synced on an unknown prim is a benign race, not an error
        tracker.mark_synced(&path, DirtyBits::CLEAN);
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_unregister_drops_bookkeeping() {
        let mut tracker = ChangeTracker::new();
        let path = shader_path();
        tracker.register(path.clone(), DirtyBits::all());

        assert!(tracker.unregister(&path));
        assert!(!tracker.unregister(&path));
        assert_eq!(tracker.dirty_bits(&path), None);
        assert_eq!(tracker.len(), 0);
    }
}

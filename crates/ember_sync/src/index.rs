//! Render-side prim registry and the per-cycle sync pass.
//!
//! The render index owns the cached prims of one render backend together
//! with their change tracker, and drives the pull side of the protocol:
//! once per update cycle, every prim with a pending mask syncs against the
//! scene source, and the remaining mask is written back.

use std::collections::HashMap;

use ember_core::PrimPath;
use rayon::prelude::*;
use thiserror::Error;

use crate::{ChangeTracker, DirtyBits, SceneSource, Sprim};

/// Errors that can occur when populating a render index.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum IndexError {
    #[error("a prim already exists at '{0}'")]
    Duplicate(PrimPath),
}

/// Owns cached prims and their dirty-state bookkeeping.
///
/// The index is generic over the prim type: a backend instantiates one
/// index per prim class it caches. Inserting a prim seeds the tracker with
/// the prim's initial mask, so the first [`sync_all`](RenderIndex::sync_all)
/// performs the full initial resync.
#[derive(Debug)]
pub struct RenderIndex<P: Sprim> {
    prims: HashMap<PrimPath, P>,
    tracker: ChangeTracker,
}

impl<P: Sprim + Send> RenderIndex<P> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            prims: HashMap::new(),
            tracker: ChangeTracker::new(),
        }
    }

    /// Insert a prim, registering it with the change tracker under its
    /// initial dirty mask.
    pub fn insert(&mut self, prim: P) -> Result<(), IndexError> {
        let path = prim.path().clone();
        if self.prims.contains_key(&path) {
            return Err(IndexError::Duplicate(path));
        }
        self.tracker.register(path.clone(), prim.initial_dirty_bits());
        self.prims.insert(path, prim);
        Ok(())
    }

    /// Remove a prim and its tracker entry.
    pub fn remove(&mut self, path: &PrimPath) -> Option<P> {
        self.tracker.unregister(path);
        self.prims.remove(path)
    }

    /// The cached prim at `path`, if any.
    pub fn get(&self, path: &PrimPath) -> Option<&P> {
        self.prims.get(path)
    }

    /// Paths of all prims in the index.
    pub fn paths(&self) -> impl Iterator<Item = &PrimPath> {
        self.prims.keys()
    }

    /// Number of prims in the index.
    pub fn len(&self) -> usize {
        self.prims.len()
    }

    /// True if the index holds no prims.
    pub fn is_empty(&self) -> bool {
        self.prims.is_empty()
    }

    /// The change tracker, for queries.
    pub fn tracker(&self) -> &ChangeTracker {
        &self.tracker
    }

    /// The change tracker, for authoring glue to mark edits through.
    pub fn tracker_mut(&mut self) -> &mut ChangeTracker {
        &mut self.tracker
    }

    /// Run one sync cycle against `source`.
    ///
    /// Every prim with a pending mask pulls its stale attributes; the
    /// remaining mask (bits the source could not answer) goes back to the
    /// tracker for the next cycle. Returns the number of prims synced.
    ///
    /// Prims own disjoint state, so the pass runs in parallel. A cycle
    /// with nothing pending performs no source queries.
    pub fn sync_all<S: SceneSource + Sync>(&mut self, source: &S) -> usize {
        let pending: HashMap<PrimPath, DirtyBits> = self
            .tracker
            .dirty_prims()
            .map(|(path, bits)| (path.clone(), bits))
            .collect();
        if pending.is_empty() {
            return 0;
        }

        let remaining: Vec<(PrimPath, DirtyBits)> = self
            .prims
            .par_iter_mut()
            .filter_map(|(path, prim)| {
                let mut bits = *pending.get(path)?;
                prim.sync(source, &mut bits);
                Some((path.clone(), bits))
            })
            .collect();

        let synced = remaining.len();
        for (path, bits) in remaining {
            self.tracker.mark_synced(&path, bits);
        }

        log::debug!("synced {} of {} prims", synced, self.prims.len());
        synced
    }
}

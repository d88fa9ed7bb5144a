//! Identity-keyed timeframe storage.
//!
//! The store is a value owned by the interactive session rather than a
//! process-wide global. Entries keep insertion order — the listing order
//! matters to the user, the intersection math does not care.

use crate::coverage::{self, CoverageRow};
use crate::error::{Result, SyncError};
use crate::overlap::{self, SharedWindow};
use crate::timeframe::Timeframe;

/// A stored timeframe with its identifier.
#[derive(Debug, Clone)]
pub struct Entry {
    pub id: String,
    pub frame: Timeframe,
}

/// Insertion-ordered mapping from unique string IDs to timeframes.
///
/// Lookups are linear scans; the store holds one interactive session's
/// handful of entries.
#[derive(Debug, Clone, Default)]
pub struct TimeframeStore {
    entries: Vec<Entry>,
}

impl TimeframeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an entry with this ID exists.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Timeframe> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.frame)
    }

    /// Insert under a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::DuplicateId`] if the ID is taken. Nothing is
    /// overwritten silently — callers confirm and then go through
    /// [`TimeframeStore::replace`].
    pub fn add(&mut self, id: impl Into<String>, frame: Timeframe) -> Result<()> {
        let id = id.into();
        if self.contains(&id) {
            return Err(SyncError::DuplicateId(id));
        }
        self.entries.push(Entry { id, frame });
        Ok(())
    }

    /// Insert, overwriting any existing entry with the same ID. An
    /// overwritten entry keeps its position in the listing.
    pub fn replace(&mut self, id: impl Into<String>, frame: Timeframe) {
        let id = id.into();
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => entry.frame = frame,
            None => self.entries.push(Entry { id, frame }),
        }
    }

    /// Remove and return the timeframe stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::NotFound`] if no such entry exists; the store
    /// is left untouched. Removing the same ID twice reports `NotFound`
    /// the second time.
    pub fn remove(&mut self, id: &str) -> Result<Timeframe> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| SyncError::NotFound(id.to_string()))?;
        Ok(self.entries.remove(pos).frame)
    }

    /// Drop every entry unconditionally. Confirmation, if any, is the
    /// caller's concern.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Entries in insertion order, for rendering.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The shared window across all stored frames.
    ///
    /// See [`overlap::shared_window`] for the reduction and its
    /// [`SyncError::InsufficientTimeframes`] precondition.
    pub fn shared_window(&self) -> Result<Option<SharedWindow>> {
        let frames: Vec<Timeframe> = self.entries.iter().map(|e| e.frame.clone()).collect();
        overlap::shared_window(&frames)
    }

    /// Coverage rows for all stored frames. See [`coverage::coverage_rows`].
    pub fn coverage_rows(&self, buckets: usize) -> Vec<CoverageRow> {
        coverage::coverage_rows(&self.entries, buckets)
    }
}

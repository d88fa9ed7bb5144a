//! Shared-interval reduction over normalized timeframes.
//!
//! The maximal window common to N intervals is bounded below by the latest
//! of all starts and above by the earliest of all ends; it exists exactly
//! when that range is nonempty. A touching boundary (latest start equal to
//! earliest end) counts as no shared window, matching the zero-length
//! rejection at [`Timeframe`] construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SyncError};
use crate::timeframe::Timeframe;

/// The maximal UTC sub-interval common to a set of timeframes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedWindow {
    /// Latest start across all frames.
    pub start: DateTime<Utc>,
    /// Earliest end across all frames.
    pub end: DateTime<Utc>,
    /// Minutes between `start` and `end`. Always positive.
    pub duration_minutes: i64,
}

impl SharedWindow {
    /// A window covering exactly one frame's normalized bounds.
    pub fn from_frame(frame: &Timeframe) -> SharedWindow {
        let (start, end) = frame.utc_bounds();
        SharedWindow {
            start,
            end,
            duration_minutes: (end - start).num_minutes(),
        }
    }

    /// Intersect with another window under the exclusive-boundary rule.
    ///
    /// Folding frames pairwise through this in any grouping order yields
    /// the same result as [`shared_window`] over the whole set.
    pub fn intersect(&self, other: &SharedWindow) -> Option<SharedWindow> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then(|| SharedWindow {
            start,
            end,
            duration_minutes: (end - start).num_minutes(),
        })
    }
}

/// Reduce the frames' normalized bounds to the maximal common sub-interval.
///
/// Tracks the latest `utc_start` and the earliest `utc_end` across all
/// frames; the shared window is `[latest_start, earliest_end)` when that
/// range is nonempty, `None` otherwise — including the touching case where
/// the latest start equals the earliest end.
///
/// Deterministic, O(n), no I/O. Permuting `frames` never changes the
/// result.
///
/// # Errors
///
/// Returns [`SyncError::InsufficientTimeframes`] when fewer than 2 frames
/// are given — a lone frame trivially "overlaps" itself, so asking is a
/// caller mistake rather than a computable answer.
pub fn shared_window(frames: &[Timeframe]) -> Result<Option<SharedWindow>> {
    if frames.len() < 2 {
        return Err(SyncError::InsufficientTimeframes(frames.len()));
    }

    let (mut latest_start, mut earliest_end) = frames[0].utc_bounds();
    for frame in &frames[1..] {
        let (start, end) = frame.utc_bounds();
        latest_start = latest_start.max(start);
        earliest_end = earliest_end.min(end);
    }

    if latest_start < earliest_end {
        Ok(Some(SharedWindow {
            start: latest_start,
            end: earliest_end,
            duration_minutes: (earliest_end - latest_start).num_minutes(),
        }))
    } else {
        Ok(None)
    }
}

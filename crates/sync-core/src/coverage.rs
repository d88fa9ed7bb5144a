//! Bucket-grid coverage rows for visualization.
//!
//! Buckets time from the earliest normalized start across all frames and
//! marks, per frame, which buckets fall inside its UTC window. Derived
//! purely from the same normalized bounds the intersection uses.

use chrono::Duration;

use crate::store::Entry;

/// Default number of buckets: 48 half-hour slots spanning 24 hours.
pub const DEFAULT_BUCKETS: usize = 48;
/// Width of one bucket, in minutes.
pub const BUCKET_MINUTES: i64 = 30;

/// One frame's coverage over the bucket grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageRow {
    pub id: String,
    /// `true` where the bucket's start instant lies inside the frame's
    /// `[utc_start, utc_end)` window.
    pub cells: Vec<bool>,
}

/// Build one coverage row per entry.
///
/// The grid origin is the global minimum `utc_start`; bucket `i` starts at
/// `origin + i * 30min` and is marked when that instant falls inside the
/// frame's window. Empty input yields no rows.
pub fn coverage_rows(entries: &[Entry], buckets: usize) -> Vec<CoverageRow> {
    let Some(origin) = entries.iter().map(|e| e.frame.utc_start()).min() else {
        return Vec::new();
    };

    entries
        .iter()
        .map(|entry| {
            let (start, end) = entry.frame.utc_bounds();
            let cells = (0..buckets)
                .map(|i| {
                    let instant = origin + Duration::minutes(i as i64 * BUCKET_MINUTES);
                    instant >= start && instant < end
                })
                .collect();
            CoverageRow {
                id: entry.id.clone(),
                cells,
            }
        })
        .collect()
}

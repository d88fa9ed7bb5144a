//! # sync-core
//!
//! Deterministic shared-timeframe computation across fixed UTC offsets.
//!
//! Each participant states an availability window in their own UTC offset;
//! sync-core normalizes every window to UTC (handling windows that cross
//! midnight) and reduces them to the maximal sub-interval common to all of
//! them. A "timezone" here is a fixed signed offset — no IANA database, no
//! DST, no network lookups: offset arithmetic is fully deterministic.
//!
//! ## Quick start
//!
//! ```rust
//! use sync_core::{parse_local, Timeframe, TimeframeStore, UtcOffset};
//!
//! let mut store = TimeframeStore::new();
//! let utc: UtcOffset = "+00:00".parse().unwrap();
//! let plus_two: UtcOffset = "+02:00".parse().unwrap();
//!
//! // 09:00–17:00 at UTC+00:00, and 12:00–20:00 at UTC+02:00 (= 10:00–18:00 UTC).
//! let a = Timeframe::new(
//!     utc,
//!     parse_local("16-03-26", "09:00").unwrap(),
//!     parse_local("16-03-26", "17:00").unwrap(),
//! )
//! .unwrap();
//! let b = Timeframe::new(
//!     plus_two,
//!     parse_local("16-03-26", "12:00").unwrap(),
//!     parse_local("16-03-26", "20:00").unwrap(),
//! )
//! .unwrap();
//! store.add("alice", a).unwrap();
//! store.add("bob", b).unwrap();
//!
//! // Shared window is UTC 10:00–17:00.
//! let shared = store.shared_window().unwrap().expect("windows overlap");
//! assert_eq!(shared.duration_minutes, 7 * 60);
//! ```
//!
//! ## Modules
//!
//! - [`offset`] — fixed `±HH:MM` UTC offsets with minute resolution
//! - [`timeframe`] — local windows normalized to cached UTC bounds
//! - [`store`] — insertion-ordered, identity-keyed timeframe storage
//! - [`overlap`] — latest-start/earliest-end shared-interval reduction
//! - [`coverage`] — bucket-grid coverage rows for visualization
//! - [`error`] — error types

pub mod coverage;
pub mod error;
pub mod offset;
pub mod overlap;
pub mod store;
pub mod timeframe;

pub use coverage::{coverage_rows, CoverageRow, BUCKET_MINUTES, DEFAULT_BUCKETS};
pub use error::{Result, SyncError};
pub use offset::UtcOffset;
pub use overlap::{shared_window, SharedWindow};
pub use store::{Entry, TimeframeStore};
pub use timeframe::{parse_local, Timeframe};

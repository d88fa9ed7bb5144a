//! Timeframe normalization — local windows to canonical UTC bounds.
//!
//! A [`Timeframe`] captures one participant's availability as stated in
//! their local offset, and caches the UTC-normalized bounds computed once
//! at construction. A window whose end is numerically at or before its
//! start crosses midnight: "22:00 to 06:00" means into the next calendar
//! day, not an inverted range.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::error::{Result, SyncError};
use crate::offset::UtcOffset;

/// Input format for local dates (`16-03-26`).
pub const DATE_FORMAT: &str = "%d-%m-%y";
/// Input format for local times (`22:00`).
pub const TIME_FORMAT: &str = "%H:%M";

/// One participant's availability window. Immutable after construction.
///
/// The normalized `(utc_start, utc_end)` pair is the only thing the
/// intersection math ever reads; the original local values and offset are
/// kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeframe {
    offset: UtcOffset,
    local_start: NaiveDateTime,
    local_end: NaiveDateTime,
    utc_start: DateTime<Utc>,
    utc_end: DateTime<Utc>,
}

impl Timeframe {
    /// Build a timeframe and normalize it to UTC.
    ///
    /// `local_start` and `local_end` are wall-clock values in the given
    /// offset, with explicit dates. Normalization shifts both by
    /// `-offset`; when `local_end <= local_start` the end is read as
    /// belonging to the following day and gains 24 hours.
    ///
    /// # Errors
    ///
    /// - [`SyncError::InvalidDateTime`] if shifting a bound leaves chrono's
    ///   representable range.
    /// - [`SyncError::EmptyWindow`] if the normalized window is zero-length
    ///   or inverted (possible with explicitly-dated inputs whose end lies
    ///   a day or more before the start).
    pub fn new(
        offset: UtcOffset,
        local_start: NaiveDateTime,
        local_end: NaiveDateTime,
    ) -> Result<Self> {
        let utc_start = shift_to_utc(local_start, offset)?;
        let mut utc_end = shift_to_utc(local_end, offset)?;

        if local_end <= local_start {
            utc_end = utc_end
                .checked_add_signed(Duration::days(1))
                .ok_or_else(|| out_of_range(local_end))?;
        }

        if utc_start >= utc_end {
            return Err(SyncError::EmptyWindow);
        }

        Ok(Timeframe {
            offset,
            local_start,
            local_end,
            utc_start,
            utc_end,
        })
    }

    /// The normalized UTC bounds, with `utc_start < utc_end` guaranteed.
    pub fn utc_bounds(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.utc_start, self.utc_end)
    }

    pub fn utc_start(&self) -> DateTime<Utc> {
        self.utc_start
    }

    pub fn utc_end(&self) -> DateTime<Utc> {
        self.utc_end
    }

    /// The offset the window was stated in. Display only.
    pub fn offset(&self) -> UtcOffset {
        self.offset
    }

    /// The original wall-clock bounds. Display only — never fed back into
    /// intersection math.
    pub fn local_bounds(&self) -> (NaiveDateTime, NaiveDateTime) {
        (self.local_start, self.local_end)
    }

    /// Minutes between the UTC bounds. Always positive.
    pub fn duration_minutes(&self) -> i64 {
        (self.utc_end - self.utc_start).num_minutes()
    }
}

/// Shift a wall-clock value by `-offset` to the UTC instant it names.
fn shift_to_utc(local: NaiveDateTime, offset: UtcOffset) -> Result<DateTime<Utc>> {
    let shifted = local
        .checked_sub_signed(offset.as_duration())
        .ok_or_else(|| out_of_range(local))?;
    Ok(Utc.from_utc_datetime(&shifted))
}

fn out_of_range(local: NaiveDateTime) -> SyncError {
    SyncError::InvalidDateTime(format!("{local} is outside the representable range"))
}

/// Parse a `DD-MM-YY` date and `HH:MM` time pair into a local date-time.
///
/// # Errors
///
/// Returns [`SyncError::InvalidDateTime`] naming the part that failed.
pub fn parse_local(date: &str, time: &str) -> Result<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| {
        SyncError::InvalidDateTime(format!("expected DD-MM-YY date, got \"{date}\""))
    })?;
    let time = NaiveTime::parse_from_str(time, TIME_FORMAT).map_err(|_| {
        SyncError::InvalidDateTime(format!("expected HH:MM time, got \"{time}\""))
    })?;
    Ok(NaiveDateTime::new(date, time))
}

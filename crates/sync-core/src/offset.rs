//! Fixed UTC offsets with minute resolution.
//!
//! A [`UtcOffset`] is a plain signed shift from UTC — not an IANA timezone.
//! There are no DST rules and no historical transitions: the caller states
//! the offset and it holds for the whole window.

use std::fmt;
use std::str::FromStr;

use chrono::Duration;

use crate::error::{Result, SyncError};

/// Largest accepted offset magnitude, in minutes (24 hours).
pub const MAX_OFFSET_MINUTES: i32 = 24 * 60;

/// A fixed signed offset from UTC, stored as whole minutes.
///
/// Parses from `±HH:MM` or `±HHMM` (the sign is mandatory) and displays as
/// `±HH:MM`. The conventional range is -12:00..+14:00, but anything up to
/// ±24:00 is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcOffset {
    minutes: i32,
}

impl UtcOffset {
    /// The zero offset.
    pub const UTC: UtcOffset = UtcOffset { minutes: 0 };

    /// Build an offset from a signed minute count.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::InvalidOffset`] if the magnitude exceeds 24 hours.
    pub fn from_minutes(minutes: i32) -> Result<Self> {
        if minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(SyncError::InvalidOffset(format!(
                "magnitude exceeds 24 hours: {minutes} minutes"
            )));
        }
        Ok(UtcOffset { minutes })
    }

    /// The offset as signed minutes east of UTC.
    pub fn minutes(self) -> i32 {
        self.minutes
    }

    /// The offset as a chrono `Duration`, for shifting local date-times.
    pub(crate) fn as_duration(self) -> Duration {
        Duration::minutes(i64::from(self.minutes))
    }
}

impl FromStr for UtcOffset {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || SyncError::InvalidOffset(format!("expected ±HH:MM or ±HHMM, got \"{s}\""));

        if !s.is_ascii() {
            return Err(malformed());
        }
        let (sign, rest) = match s.as_bytes().first() {
            Some(b'+') => (1, &s[1..]),
            Some(b'-') => (-1, &s[1..]),
            _ => return Err(malformed()),
        };
        let (hh, mm) = match rest.len() {
            4 => (&rest[..2], &rest[2..]),
            5 if rest.as_bytes()[2] == b':' => (&rest[..2], &rest[3..]),
            _ => return Err(malformed()),
        };
        if !hh.bytes().all(|b| b.is_ascii_digit()) || !mm.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        let hours: i32 = hh.parse().map_err(|_| malformed())?;
        let minutes: i32 = mm.parse().map_err(|_| malformed())?;
        if minutes >= 60 {
            return Err(SyncError::InvalidOffset(format!(
                "minute component must be below 60: \"{s}\""
            )));
        }

        UtcOffset::from_minutes(sign * (hours * 60 + minutes))
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let abs = self.minutes.abs();
        write!(f, "{}{:02}:{:02}", sign, abs / 60, abs % 60)
    }
}

//! Clock times and minute windows.
//!
//! Entries record clock times at minute granularity; overlap detection
//! works on half-open minute intervals from midnight.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::arith;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A clock time as minutes from midnight (0..1440).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClockTime(u32);

/// Error parsing a `"HH:MM"` clock time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid clock time: {input:?}, expected HH:MM")]
pub struct ClockTimeParseError {
    /// The offending input.
    pub input: String,
}

impl ClockTime {
    /// 09:00, the fallback start for placeholder windows.
    pub const DEFAULT_DAY_START: Self = Self(540);

    /// Creates a clock time from a minute-of-day offset.
    ///
    /// Returns `None` if the offset is 1440 or more.
    #[must_use]
    pub fn from_minute(minute: u32) -> Option<Self> {
        (minute < MINUTES_PER_DAY).then_some(Self(minute))
    }

    /// Minutes from midnight.
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.0
    }

    /// Hours between `start` and `end` as an exact decimal.
    ///
    /// A negative span is treated as crossing midnight. The result is
    /// rounded to 2 fractional digits (minute granularity never needs
    /// more).
    #[must_use]
    pub fn span_hours(start: Self, end: Self) -> Decimal {
        let mut minutes = i64::from(end.0) - i64::from(start.0);
        if minutes < 0 {
            minutes += i64::from(MINUTES_PER_DAY);
        }
        arith::round(Decimal::from(minutes) / Decimal::from(60), 2)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ClockTimeParseError {
            input: s.to_string(),
        };
        let (h, m) = s.split_once(':').ok_or_else(err)?;
        let hours: u32 = h.parse().map_err(|_| err())?;
        let minutes: u32 = m.parse().map_err(|_| err())?;
        if h.len() > 2 || m.len() != 2 || hours > 23 || minutes > 59 {
            return Err(err());
        }
        Ok(Self(hours * 60 + minutes))
    }
}

/// A half-open minute interval `[start, end)` on one day.
///
/// `end` may exceed 1440 when a recorded window crosses midnight; two
/// same-day windows still compare correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Start minute (inclusive).
    pub start: u32,
    /// End minute (exclusive).
    pub end: u32,
}

impl TimeWindow {
    /// The window between two recorded clock times.
    ///
    /// An end at or before the start is taken to cross midnight.
    #[must_use]
    pub fn from_clock(start: ClockTime, end: ClockTime) -> Self {
        let s = start.minute();
        let mut e = end.minute();
        if e <= s {
            e += MINUTES_PER_DAY;
        }
        Self { start: s, end: e }
    }

    /// The assumed window for an entry without recorded clock times:
    /// `start` plus the entry's duration.
    #[must_use]
    pub fn placeholder(start: ClockTime, hours: Decimal) -> Self {
        let duration = (hours * Decimal::from(60)).round().to_u32().unwrap_or(0);
        Self {
            start: start.minute(),
            end: start.minute() + duration,
        }
    }

    /// True if the two half-open intervals intersect.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fmt_minute = |m: u32| format!("{:02}:{:02}", (m / 60) % 24, m % 60);
        write!(f, "{}-{}", fmt_minute(self.start), fmt_minute(self.end))
    }
}

//! Series types for daily plugin statistics

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use std::fmt;

/// One raw sample from the stats API: a unix-millisecond timestamp and the
/// value recorded at that instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawPoint {
    pub timestamp_ms: i64,
    pub value: i64,
}

/// UTC calendar day used as the aggregation key
///
/// Wraps a `NaiveDate` so day arithmetic, ordering and the fixed chart axis
/// format live in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    /// Smallest representable day, usable as a fold seed
    pub const MIN: DayKey = DayKey(NaiveDate::MIN);
    /// Largest representable day, usable as a fold seed
    pub const MAX: DayKey = DayKey(NaiveDate::MAX);

    /// Day containing the UTC instant `millis` milliseconds after the epoch
    pub fn from_timestamp_millis(millis: i64) -> Option<DayKey> {
        DateTime::<Utc>::from_timestamp_millis(millis).map(|at| DayKey(at.date_naive()))
    }

    /// Continuous day number (day 1 is 0001-01-01)
    pub fn number(self) -> i32 {
        self.0.num_days_from_ce()
    }

    /// Inverse of [`DayKey::number`]
    pub fn from_number(number: i32) -> Option<DayKey> {
        NaiveDate::from_num_days_from_ce_opt(number).map(DayKey)
    }

    /// The day `offset` days after this one
    pub fn add_days(self, offset: i32) -> Option<DayKey> {
        Self::from_number(self.number().checked_add(offset)?)
    }

    /// Midnight timestamp in the exact format the chart's time axis parses
    pub fn to_date_format(self) -> String {
        self.0.format("%m/%d/%Y 00:00").to_string()
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        DayKey(date)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%m-%d"))
    }
}

/// One day of the dense series handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesPoint {
    pub date: DayKey,
    pub value: i64,
}

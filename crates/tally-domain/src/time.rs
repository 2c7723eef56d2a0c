//! Date-range values used by the filtered transaction views.

use std::fmt;

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Defines a half-open reporting window: `start` inclusive, `end` exclusive.
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, DateRangeError> {
        if end <= start {
            return Err(DateRangeError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }

    /// Returns the calendar month containing `reference`, from the first
    /// instant of that month to the first instant of the next.
    pub fn month_of(reference: DateTime<Utc>) -> Self {
        let start = first_of_month(reference.year(), reference.month());
        let end = first_of_next_month(reference.year(), reference.month());
        Self { start, end }
    }

    /// Returns the calendar month before the one containing `reference`.
    pub fn previous_month_of(reference: DateTime<Utc>) -> Self {
        let (year, month) = if reference.month() == 1 {
            (reference.year() - 1, 12)
        } else {
            (reference.year(), reference.month() - 1)
        };
        Self {
            start: first_of_month(year, month),
            end: first_of_month(reference.year(), reference.month()),
        }
    }

    /// Returns the trailing window of `days` days ending at `end`.
    pub fn last_days(end: DateTime<Utc>, days: u32) -> Self {
        let days = days.max(1);
        Self {
            start: end - Duration::days(days as i64),
            end,
        }
    }
}

fn first_of_month(year: i32, month: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).unwrap()
}

fn first_of_next_month(year: i32, month: u32) -> DateTime<Utc> {
    if month == 12 {
        first_of_month(year + 1, 1)
    } else {
        first_of_month(year, month + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur when constructing [`DateRange`] values.
pub enum DateRangeError {
    InvalidRange,
}

impl fmt::Display for DateRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRangeError::InvalidRange => f.write_str("range end must be after start"),
        }
    }
}

impl std::error::Error for DateRangeError {}

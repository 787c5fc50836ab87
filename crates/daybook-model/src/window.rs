//! The report time window and date-derived path segments.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// Length of the report window in hours.
const WINDOW_HOURS: i64 = 24;

/// The "last 24 hours" window ending at the run's start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    /// Creates the window ending now.
    #[must_use]
    pub fn now() -> Self {
        Self::ending_at(Utc::now())
    }

    /// Creates the window ending at `end`.
    #[must_use]
    pub fn ending_at(end: DateTime<Utc>) -> Self {
        Self {
            start: end - Duration::hours(WINDOW_HOURS),
            end,
        }
    }

    /// Returns the window start (`end - 24h`).
    #[must_use]
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the instant the window was computed for.
    #[must_use]
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns the calendar date of the run.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.end.date_naive()
    }

    /// Returns true if `timestamp` falls strictly after the window start.
    #[must_use]
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp > self.start
    }
}

/// Zero-padded date components used to build output paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParts {
    /// Four-digit year.
    pub year: String,
    /// Two-digit month.
    pub month: String,
    /// Two-digit day.
    pub day: String,
}

impl DateParts {
    /// Splits a calendar date into path segments.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: format!("{:04}", date.year()),
            month: format!("{:02}", date.month()),
            day: format!("{:02}", date.day()),
        }
    }
}

/// Formats a calendar date as `YYYY-MM-DD`.
#[must_use]
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

//! Point-in-time due dates parsed from ISO 8601 strings.

use super::ParseDueDateError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a calendar date in `YYYY-MM-DD` form.
const CALENDAR_DATE_LEN: usize = 10;

/// Length of a reduced-precision calendar month in `YYYY-MM` form.
const CALENDAR_MONTH_LEN: usize = 7;

/// Date-time layouts carrying a numeric UTC offset, with or without colon.
const OFFSET_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

/// Date-time layouts read as UTC: zulu-suffixed or without any offset.
const UTC_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.fZ",
    "%Y-%m-%dT%H:%MZ",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Due date of a task, normalized to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DueDate(DateTime<Utc>);

impl DueDate {
    /// Parses an ISO 8601 date or date-time string.
    ///
    /// Accepted shapes are a calendar date (`2024-12-31`, read as midnight
    /// UTC), a calendar month (`2024-12`, read as the first day), and a
    /// date-time with or without seconds. A date-time may carry `Z`, a
    /// numeric offset (`+02:00` or `+0200`), or no offset at all, in which
    /// case it is read as UTC.
    ///
    /// # Errors
    ///
    /// Returns [`ParseDueDateError`] when the string matches none of the
    /// accepted shapes or names a day that does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard::task::domain::DueDate;
    ///
    /// let due = DueDate::parse("2024-12-31").expect("calendar date");
    /// assert_eq!(due.to_string(), "2024-12-31T00:00:00+00:00");
    /// assert!(DueDate::parse("2023-02-30").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self, ParseDueDateError> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
            return Ok(Self(parsed.with_timezone(&Utc)));
        }

        if let Some(parsed) = OFFSET_DATE_TIME_FORMATS
            .iter()
            .find_map(|format| DateTime::parse_from_str(value, format).ok())
        {
            return Ok(Self(parsed.with_timezone(&Utc)));
        }

        if let Some(parsed) = UTC_DATE_TIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        {
            return Ok(Self(parsed.and_utc()));
        }

        if value.len() == CALENDAR_DATE_LEN
            && let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        {
            return Ok(Self::midnight(date));
        }

        if value.len() == CALENDAR_MONTH_LEN
            && let Ok(date) = NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d")
        {
            return Ok(Self::midnight(date));
        }

        Err(ParseDueDateError(value.to_owned()))
    }

    fn midnight(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN).and_utc())
    }

    /// Wraps an existing UTC timestamp.
    #[must_use]
    pub const fn from_datetime(value: DateTime<Utc>) -> Self {
        Self(value)
    }

    /// Returns the wrapped UTC timestamp.
    #[must_use]
    pub const fn as_datetime(self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for DueDate {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339())
    }
}

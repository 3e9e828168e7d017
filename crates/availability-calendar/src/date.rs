//! Calendar days with a canonical `YYYY-MM-DD` identity.
//!
//! A [`CalendarDate`] carries no time-of-day and no timezone. Instants are
//! turned into days only through an explicit timezone ([`CalendarDate::from_datetime`],
//! [`CalendarDate::in_timezone`]), so two sides of a comparison always agree
//! on which day they mean.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CalendarError, Result};

/// The canonical string form of a [`CalendarDate`].
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// A single calendar day, identified by its `YYYY-MM-DD` form.
///
/// Equality, ordering, and hashing follow the underlying day, which is
/// equivalent to comparing canonical strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from its year, month (1-12) and day (1-31) parts.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the parts do not name a real day
    /// (e.g. February 30th).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                CalendarError::InvalidDate(format!("{year:04}-{month:02}-{day:02} is not a calendar day"))
            })
    }

    /// Parse a canonical `YYYY-MM-DD` string.
    ///
    /// Surrounding whitespace is ignored. Anything that does not round-trip to
    /// the same canonical string is rejected: `2024-6-1` is not accepted as a
    /// spelling of `2024-06-01`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the input is not a canonical date.
    ///
    /// # Examples
    ///
    /// ```
    /// use availability_calendar::CalendarDate;
    ///
    /// let date = CalendarDate::parse("2024-02-29").unwrap();
    /// assert_eq!(date.to_string(), "2024-02-29");
    /// assert!(CalendarDate::parse("2023-02-29").is_err());
    /// assert!(CalendarDate::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let date = NaiveDate::parse_from_str(trimmed, CANONICAL_FORMAT)
            .map_err(|e| CalendarError::InvalidDate(format!("'{}': {}", s, e)))?;

        let date = Self(date);
        if date.canonical() != trimmed {
            return Err(CalendarError::InvalidDate(format!(
                "'{}': expected canonical YYYY-MM-DD form",
                s
            )));
        }
        Ok(date)
    }

    /// Truncate an instant to the calendar day it falls on in its own timezone.
    pub fn from_datetime<T: TimeZone>(dt: &DateTime<T>) -> Self {
        Self(dt.date_naive())
    }

    /// The calendar day `instant` falls on in the IANA zone `tz`.
    ///
    /// ```
    /// use availability_calendar::CalendarDate;
    /// use chrono::{TimeZone, Utc};
    ///
    /// // 02:00 UTC on June 1st is still May 31st in New York.
    /// let instant = Utc.with_ymd_and_hms(2024, 6, 1, 2, 0, 0).unwrap();
    /// let day = CalendarDate::in_timezone(&instant, chrono_tz::America::New_York);
    /// assert_eq!(day.to_string(), "2024-05-31");
    /// ```
    pub fn in_timezone(instant: &DateTime<Utc>, tz: Tz) -> Self {
        Self::from_datetime(&instant.with_timezone(&tz))
    }

    /// The day `days` after this one, or `None` past the representable range.
    pub fn checked_add_days(self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(Self)
    }

    /// The canonical `YYYY-MM-DD` string.
    pub fn canonical(&self) -> String {
        self.0.format(CANONICAL_FORMAT).to_string()
    }

    /// The underlying chrono date.
    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CANONICAL_FORMAT))
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Parse an IANA timezone name into `Tz`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidTimezone`] for names not in the tz database.
pub fn parse_timezone(s: &str) -> Result<Tz> {
    s.trim()
        .parse::<Tz>()
        .map_err(|_| CalendarError::InvalidTimezone(format!("'{}'", s)))
}

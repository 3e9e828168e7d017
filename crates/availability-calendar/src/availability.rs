//! The set of bookable days supplied by the upstream availability service.
//!
//! Input arrives as loose date strings. Malformed entries are dropped and
//! reported instead of failing the whole set, so one bad value never blanks
//! the calendar.

use std::collections::HashSet;

use serde::Serialize;
use tracing::warn;

use crate::date::CalendarDate;

/// Days on which the service is available. Membership test only.
///
/// Built once per render and never mutated afterwards: there is no insert or
/// remove API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilitySet {
    dates: HashSet<CalendarDate>,
}

/// Outcome of parsing raw availability strings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseReport {
    /// The well-formed dates.
    #[serde(skip)]
    pub set: AvailabilitySet,
    /// The entries that were not canonical `YYYY-MM-DD` dates, as given.
    pub rejected: Vec<String>,
}

impl AvailabilitySet {
    /// An empty set: every day renders as unavailable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse raw date strings, keeping the valid ones and reporting the rest.
    ///
    /// Order and duplicates in the input do not matter.
    ///
    /// # Examples
    ///
    /// ```
    /// use availability_calendar::{AvailabilitySet, CalendarDate};
    ///
    /// let report = AvailabilitySet::parse(["2024-06-01", "not-a-date"]);
    /// assert_eq!(report.set.len(), 1);
    /// assert!(report.set.contains(&CalendarDate::parse("2024-06-01").unwrap()));
    /// assert_eq!(report.rejected, vec!["not-a-date".to_string()]);
    /// ```
    pub fn parse<I, S>(entries: I) -> ParseReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dates = HashSet::new();
        let mut rejected = Vec::new();

        for entry in entries {
            let raw = entry.as_ref();
            match CalendarDate::parse(raw) {
                Ok(date) => {
                    dates.insert(date);
                }
                Err(e) => {
                    warn!(entry = raw, error = %e, "dropping malformed availability date");
                    rejected.push(raw.to_string());
                }
            }
        }

        ParseReport {
            set: Self { dates },
            rejected,
        }
    }

    /// Like [`AvailabilitySet::parse`], discarding the rejection report.
    pub fn from_strings<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::parse(entries).set
    }

    /// True if `date` was listed as available.
    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.dates.contains(date)
    }

    /// Number of distinct available days.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The dates in ascending order.
    pub fn to_sorted_vec(&self) -> Vec<CalendarDate> {
        let mut dates: Vec<CalendarDate> = self.dates.iter().copied().collect();
        dates.sort_unstable();
        dates
    }
}

impl FromIterator<CalendarDate> for AvailabilitySet {
    fn from_iter<I: IntoIterator<Item = CalendarDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

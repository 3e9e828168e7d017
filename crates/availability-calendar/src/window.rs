//! The run of consecutive days the calendar displays.
//!
//! Windows are computed from an explicit anchor day. Nothing here reads the
//! system clock: the host decides what "today" is and passes it in.

use serde::Serialize;
use tracing::debug;

use crate::date::CalendarDate;
use crate::error::{CalendarError, Result};

/// Number of days shown by the availability calendar.
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Longest window a builder will produce. Keeps the per-day loop bounded.
pub const MAX_WINDOW_DAYS: i64 = 366;

/// An ordered run of consecutive calendar days, strictly increasing by one
/// day with no gaps or duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CalendarWindow {
    dates: Vec<CalendarDate>,
}

impl CalendarWindow {
    /// The days in window order.
    pub fn dates(&self) -> &[CalendarDate] {
        &self.dates
    }

    /// Number of days in the window.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// True for windows built with a non-positive length.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The anchor day (offset 0), if the window is non-empty.
    pub fn first(&self) -> Option<CalendarDate> {
        self.dates.first().copied()
    }

    /// The final day, `length - 1` days after the anchor.
    pub fn last(&self) -> Option<CalendarDate> {
        self.dates.last().copied()
    }

    /// Iterate the days in window order.
    pub fn iter(&self) -> std::slice::Iter<'_, CalendarDate> {
        self.dates.iter()
    }
}

impl<'a> IntoIterator for &'a CalendarWindow {
    type Item = &'a CalendarDate;
    type IntoIter = std::slice::Iter<'a, CalendarDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.iter()
    }
}

/// Builds [`CalendarWindow`]s of a fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindowBuilder {
    length: i64,
}

impl Default for DateWindowBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_DAYS)
    }
}

impl DateWindowBuilder {
    /// A builder producing windows of `length` days. Non-positive lengths
    /// produce empty windows; lengths above [`MAX_WINDOW_DAYS`] are rejected
    /// by [`DateWindowBuilder::build`].
    pub fn new(length: i64) -> Self {
        Self { length }
    }

    /// The configured window length, as given to [`DateWindowBuilder::new`].
    pub fn length(&self) -> i64 {
        self.length
    }

    /// Build the window starting at `today`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWindow`] if the length exceeds
    /// [`MAX_WINDOW_DAYS`], and [`CalendarError::InvalidDate`] if the last day
    /// of the window falls outside the representable calendar range.
    ///
    /// # Examples
    ///
    /// ```
    /// use availability_calendar::{CalendarDate, DateWindowBuilder};
    ///
    /// let today = CalendarDate::parse("2024-01-15").unwrap();
    /// let window = DateWindowBuilder::default().build(today).unwrap();
    /// assert_eq!(window.len(), 30);
    /// assert_eq!(window.last().unwrap().to_string(), "2024-02-13");
    /// ```
    pub fn build(&self, today: CalendarDate) -> Result<CalendarWindow> {
        if self.length <= 0 {
            debug!(%today, length = self.length, "empty calendar window");
            return Ok(CalendarWindow::default());
        }
        if self.length > MAX_WINDOW_DAYS {
            return Err(CalendarError::InvalidWindow(format!(
                "{} days exceeds the maximum of {}",
                self.length, MAX_WINDOW_DAYS
            )));
        }

        let span = (self.length - 1) as u64;
        today.checked_add_days(span).ok_or_else(|| {
            CalendarError::InvalidDate(format!(
                "window of {} days from {} exceeds the calendar range",
                self.length, today
            ))
        })?;

        // The last day was checked above, so every earlier offset is in range too.
        let dates: Vec<CalendarDate> = (0..=span)
            .filter_map(|offset| today.checked_add_days(offset))
            .collect();

        debug!(%today, days = dates.len(), "built calendar window");
        Ok(CalendarWindow { dates })
    }

    /// Build the window from an anchor given as a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if `today` is not a canonical date.
    pub fn build_from_str(&self, today: &str) -> Result<CalendarWindow> {
        self.build(CalendarDate::parse(today)?)
    }
}

/// Build a window of `length` days starting at `today`.
pub fn build_window(today: CalendarDate, length: i64) -> Result<CalendarWindow> {
    DateWindowBuilder::new(length).build(today)
}

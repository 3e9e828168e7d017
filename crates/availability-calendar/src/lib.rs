//! # availability-calendar
//!
//! Deterministic short-range availability calendar.
//!
//! Given an anchor day and the set of dates on which a service is bookable
//! (computed upstream), this crate builds the run of upcoming days, classifies
//! each as available or unavailable, and renders one color-coded block per
//! day into a host-provided container. The library never reads the system
//! clock; callers pass "today" in.
//!
//! ## Modules
//!
//! - [`date`] - `YYYY-MM-DD` calendar days and timezone-explicit normalization
//! - [`availability`] - Availability set parsing with malformed-entry tolerance
//! - [`window`] - Consecutive-day window construction
//! - [`style`] - Day states and the theme mapping them to block styles
//! - [`render`] - Classification, block building, and the [`Mount`] capability
//! - [`html`] - HTML container mount
//! - [`config`] - JSON configuration
//! - [`error`] - Error types

pub mod availability;
pub mod config;
pub mod date;
pub mod error;
pub mod html;
pub mod render;
pub mod style;
pub mod window;

pub use availability::{AvailabilitySet, ParseReport};
pub use config::CalendarConfig;
pub use date::{parse_timezone, CalendarDate};
pub use error::CalendarError;
pub use html::{render_html_calendar, HtmlContainer};
pub use render::{
    classify, render, AvailabilityCalendarRenderer, CalendarDayView, Mount, VisualBlockSpec,
};
pub use style::{BlockStyle, CalendarTheme, DayState};
pub use window::{
    build_window, CalendarWindow, DateWindowBuilder, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS,
};

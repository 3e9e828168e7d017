//! Calendar configuration loaded from JSON.
//!
//! Every field is optional in the file; missing fields take the defaults of
//! the standard 30-day widget.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};
use crate::html::{HtmlContainer, DEFAULT_CONTAINER_ID, DEFAULT_DOCUMENT_HEIGHT};
use crate::render::AvailabilityCalendarRenderer;
use crate::style::CalendarTheme;
use crate::window::{DateWindowBuilder, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    /// Window length in days, at most [`MAX_WINDOW_DAYS`]. Non-positive values
    /// render an empty calendar.
    pub days: i64,
    /// Element id of the container the calendar is mounted in.
    pub container_id: String,
    /// Frame height for standalone document output, in pixels.
    pub document_height: u32,
    pub theme: CalendarTheme,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_WINDOW_DAYS,
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            document_height: DEFAULT_DOCUMENT_HEIGHT,
            theme: CalendarTheme::default(),
        }
    }
}

impl CalendarConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Config`] for malformed JSON, unknown fields, or
    /// theme values that fail [`CalendarTheme::validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use availability_calendar::CalendarConfig;
    ///
    /// let config = CalendarConfig::from_json(r#"{"days": 14}"#).unwrap();
    /// assert_eq!(config.days, 14);
    /// assert_eq!(config.container_id, "calendar-container");
    /// ```
    pub fn from_json(s: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(s).map_err(|e| CalendarError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Config`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CalendarError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&contents)
    }

    /// Check the window length, frame height and theme.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.days > MAX_WINDOW_DAYS {
            return Err(CalendarError::Config(format!(
                "days must be at most {}, got {}",
                MAX_WINDOW_DAYS, self.days
            )));
        }
        if self.document_height == 0 {
            return Err(CalendarError::Config(
                "document_height must be positive".to_string(),
            ));
        }
        self.theme.validate()
    }

    /// A window builder for the configured length.
    pub fn window_builder(&self) -> DateWindowBuilder {
        DateWindowBuilder::new(self.days)
    }

    /// A renderer painting with the configured theme.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Config`] if the theme fails validation.
    pub fn renderer(&self) -> Result<AvailabilityCalendarRenderer> {
        AvailabilityCalendarRenderer::new(self.theme.clone())
    }

    /// A fresh, empty container for this configuration.
    pub fn container(&self) -> HtmlContainer {
        HtmlContainer::new(self.container_id.clone()).with_font_family(self.theme.font_family.clone())
    }
}

//! Visual states and the theme that maps them to block styling.

use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};

/// Visual state of one day block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayState {
    Available,
    Unavailable,
}

impl DayState {
    /// `Available` when `available` is true, `Unavailable` otherwise.
    pub fn from_available(available: bool) -> Self {
        if available {
            Self::Available
        } else {
            Self::Unavailable
        }
    }

    /// Lowercase name, used for CSS class suffixes and text output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Unavailable => "unavailable",
        }
    }
}

/// Style shared by every block regardless of state.
///
/// Values are CSS lengths/keywords, passed through as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlockStyle {
    pub padding: String,
    pub margin: String,
    pub border_radius: String,
    pub font_weight: String,
    /// `inline-block` gives the left-to-right wrapping flow.
    pub display: String,
}

impl Default for BlockStyle {
    fn default() -> Self {
        Self {
            padding: "6px".to_string(),
            margin: "4px".to_string(),
            border_radius: "6px".to_string(),
            font_weight: "bold".to_string(),
            display: "inline-block".to_string(),
        }
    }
}

impl BlockStyle {
    /// CSS declarations for this style, after a `background-color` of `background`.
    pub fn declarations<'a>(&'a self, background: &'a str) -> [(&'static str, &'a str); 6] {
        [
            ("background-color", background),
            ("padding", self.padding.as_str()),
            ("margin", self.margin.as_str()),
            ("display", self.display.as_str()),
            ("border-radius", self.border_radius.as_str()),
            ("font-weight", self.font_weight.as_str()),
        ]
    }
}

/// Maps [`DayState`] to a background color and carries the shared block style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarTheme {
    pub available_color: String,
    pub unavailable_color: String,
    /// Font family of the container the blocks are mounted in.
    pub font_family: String,
    pub block: BlockStyle,
}

impl Default for CalendarTheme {
    fn default() -> Self {
        Self {
            available_color: "lightgreen".to_string(),
            unavailable_color: "#f99".to_string(),
            font_family: "sans-serif".to_string(),
            block: BlockStyle::default(),
        }
    }
}

impl CalendarTheme {
    /// Background color for blocks in `state`.
    pub fn background_for(&self, state: DayState) -> &str {
        match state {
            DayState::Available => &self.available_color,
            DayState::Unavailable => &self.unavailable_color,
        }
    }

    /// Reject values that could break out of an inline `style` attribute.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        validate_css_value("available_color", &self.available_color)?;
        validate_css_value("unavailable_color", &self.unavailable_color)?;
        validate_css_value("font_family", &self.font_family)?;
        self.block.validate()
    }
}

/// Reject a single CSS value that is empty or could end its declaration
/// early (`;`), close the attribute, or open markup.
///
/// # Errors
///
/// Returns [`CalendarError::Config`] naming `name`.
pub fn validate_css_value(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalendarError::Config(format!("theme {name} is empty")));
    }
    if value.chars().any(is_unsafe_css_char) {
        return Err(CalendarError::Config(format!(
            "theme {name} contains forbidden characters: '{value}'"
        )));
    }
    Ok(())
}

impl BlockStyle {
    /// Check every value with [`validate_css_value`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        validate_css_value("block.padding", &self.padding)?;
        validate_css_value("block.margin", &self.margin)?;
        validate_css_value("block.border_radius", &self.border_radius)?;
        validate_css_value("block.font_weight", &self.font_weight)?;
        validate_css_value("block.display", &self.display)
    }
}

fn is_unsafe_css_char(c: char) -> bool {
    matches!(c, ';' | '"' | '\'' | '<' | '>' | '{' | '}' | '\\') || c.is_control()
}

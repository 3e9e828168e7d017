//! Error types for availability-calendar operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid window: {0}")]
    InvalidWindow(String),

    #[error("Invalid mount: {0}")]
    InvalidMount(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, CalendarError>;

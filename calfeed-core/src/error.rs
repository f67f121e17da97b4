//! Error types for calfeed.

use thiserror::Error;

/// Errors that can occur while building or writing calendar feeds.
#[derive(Error, Debug)]
pub enum CalFeedError {
    /// A date string or event field could not be interpreted.
    #[error("Format error: {0}")]
    Format(String),

    /// The weather feed answered, but without the expected `daily` section.
    /// `raw` holds the response body for diagnostics.
    #[error("Unexpected forecast response for {city}: {reason}")]
    DataShape {
        city: String,
        reason: String,
        raw: String,
    },

    #[error("Weather request failed for {city}: {message}")]
    Transport { city: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalFeedError {
    /// Failures that only affect a single city's weather calendar.
    pub fn is_per_city(&self) -> bool {
        matches!(self, Self::DataShape { .. } | Self::Transport { .. })
    }
}

/// Result type alias for calfeed operations.
pub type CalFeedResult<T> = Result<T, CalFeedError>;

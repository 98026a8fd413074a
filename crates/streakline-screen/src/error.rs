//! Error types for screening operations.

use streakline_span::SpanError;
use thiserror::Error;

use crate::metric::Metric;

/// Result type for screening operations.
pub type Result<T> = std::result::Result<T, ScreenError>;

/// Errors that can occur while screening companies.
#[derive(Debug, Error)]
pub enum ScreenError {
    /// Screen configuration failed validation
    #[error("Invalid screen configuration: {0}")]
    InvalidConfig(String),

    /// A required metric series was not supplied
    #[error("Missing {metric} series for {symbol}")]
    MissingMetric {
        /// Company being screened
        symbol: String,
        /// Metric that was absent
        metric: Metric,
    },

    /// A metric series is too short to judge
    #[error("Insufficient {metric} data for {symbol}: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Company being screened
        symbol: String,
        /// Metric that was too short
        metric: Metric,
        /// Required number of observations
        required: usize,
        /// Actual number of observations
        actual: usize,
    },

    /// Span tracking rejected a value
    #[error("Span error: {0}")]
    Span(#[from] SpanError),

    /// Configuration could not be parsed
    #[error("Configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
}

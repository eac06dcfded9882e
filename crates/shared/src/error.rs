//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// The valuation engine itself is total and never returns these; they cover
/// the boundary work around it (loading configuration, reading snapshots,
/// rejecting malformed records).
#[derive(Debug, Error)]
pub enum AppError {
    /// Input record failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced asset or file not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// I/O failure while reading input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot could not be decoded.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl AppError {
    /// Returns a stable error code for logs and exit reporting.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Parse(_) => "PARSE_ERROR",
        }
    }

    /// Returns true if the error was caused by bad input rather than the environment.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Parse(_))
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

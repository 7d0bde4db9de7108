//! Error types for the Store Recap Engine.
//!
//! Report parsing and metric calculation never fail: unknown values are
//! carried as `None` and surfaced as audit warnings. The errors here cover
//! the fallible edges of the crate, loading goal configuration and
//! exporting the recap table.

use thiserror::Error;

/// The main error type for the Store Recap Engine.
///
/// # Example
///
/// ```
/// use store_recap_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/centers.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/centers.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Center id was not found in the configuration.
    #[error("Center not found: {center}")]
    CenterNotFound {
        /// The center id that was not found.
        center: String,
    },

    /// A configured goal was rejected during validation.
    #[error("Invalid goal for center '{center}': {message}")]
    InvalidGoal {
        /// The center whose goal was rejected.
        center: String,
        /// A description of what made the goal invalid.
        message: String,
    },

    /// Writing the recap table failed.
    #[error("Export error: {message}")]
    ExportError {
        /// A description of the export failure.
        message: String,
    },
}

impl From<csv::Error> for EngineError {
    fn from(err: csv::Error) -> Self {
        EngineError::ExportError {
            message: err.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

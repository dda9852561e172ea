//! Unified error handling for the feedback analyzer
//!
//! This module provides a unified error type that consolidates all domain-specific
//! errors into a single `Error` enum, while maintaining the ability to use
//! domain-specific errors when needed.
//!
//! # Architecture
//!
//! - [`AnalyzerErrorTrait`] - Common interface implemented by all error types
//! - [`ErrorCategory`] - Classification of errors for handling strategies
//! - [`Error`] - Unified error enum wrapping all domain-specific errors
//!
//! Most analysis steps never fail: bad cells become missing values and
//! unavailable resources degrade with a warning. What remains here is I/O,
//! parsing of input files, template rendering and configuration.
//!
//! # Usage
//!
//! ```
//! use feedback_analyzer::error::{AnalyzerErrorTrait, Error, ErrorCategory};
//!
//! let err = Error::config("max_words must be greater than 0");
//! assert_eq!(err.category(), ErrorCategory::Config);
//! assert!(!err.is_recoverable());
//! ```

use thiserror::Error;

pub use crate::input::InputError;
pub use crate::report::ReportError;
pub use crate::visualize::VisualizeError;

/// Common trait for all analyzer error types
pub trait AnalyzerErrorTrait: std::error::Error {
    /// Check if retrying (for example with another output path) can succeed
    fn is_recoverable(&self) -> bool;

    /// Get the error category for handling strategies
    fn category(&self) -> ErrorCategory;
}

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Unusable input data (unreadable table, unknown column, no words)
    Input,
    /// Template registration and rendering
    Rendering,
    /// File output and other I/O
    Storage,
    /// Configuration and validation errors
    Config,
}

impl ErrorCategory {
    /// Short human-readable description
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Input => "input error",
            Self::Rendering => "rendering error",
            Self::Storage => "storage error",
            Self::Config => "configuration error",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Unified error type for the feedback analyzer
#[derive(Error, Debug)]
pub enum Error {
    /// Word cloud errors
    #[error("Word cloud error: {0}")]
    Visualize(#[from] VisualizeError),

    /// Input parsing errors
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Report rendering and saving errors
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

impl AnalyzerErrorTrait for Error {
    fn is_recoverable(&self) -> bool {
        match self {
            Self::Visualize(e) => e.is_recoverable(),
            Self::Input(e) => e.is_recoverable(),
            Self::Report(e) => e.is_recoverable(),
            Self::Config(_) => false,
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Visualize(e) => e.category(),
            Self::Input(e) => e.category(),
            Self::Report(e) => e.category(),
            Self::Config(_) => ErrorCategory::Config,
        }
    }
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;

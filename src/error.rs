//! Error types for the Prosa library.
//!
//! All fallible operations in the crate return [`Result`], whose error type
//! is the [`ProsaError`] enum. Note that the analysis engine itself reports
//! degenerate inputs (empty text, zero sentences) as data inside the reports,
//! never as errors; `ProsaError` covers genuine failures such as I/O on the
//! CLI side or invalid configuration.
//!
//! # Examples
//!
//! ```
//! use prosa::error::{ProsaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ProsaError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Prosa operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for creating specific error types.
#[derive(Error, Debug)]
pub enum ProsaError {
    /// I/O errors (reading input files, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ProsaError.
pub type Result<T> = std::result::Result<T, ProsaError>;

impl ProsaError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ProsaError::Analysis(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        ProsaError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ProsaError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ProsaError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

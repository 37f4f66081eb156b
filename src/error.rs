//! Error types for the typofix library.
//!
//! All fallible operations return [`Result`], which wraps [`TypofixError`].
//! The core correction pipeline itself is total and never fails; errors only
//! arise at the file and CLI surfaces.
//!
//! # Examples
//!
//! ```
//! use typofix::error::{Result, TypofixError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TypofixError::invalid_input("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for typofix operations.
#[derive(Error, Debug)]
pub enum TypofixError {
    /// I/O errors (reading rule files, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed external input (e.g. a rules file line that is not a pair)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TypofixError.
pub type Result<T> = std::result::Result<T, TypofixError>;

impl TypofixError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        TypofixError::InvalidInput(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TypofixError::Other(msg.into())
    }
}

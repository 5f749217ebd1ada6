//! Error types for the Vigil library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`VigilError`] enum.
//!
//! # Examples
//!
//! ```
//! use vigil::error::{Result, VigilError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(VigilError::analysis("min_gram must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Vigil operations.
#[derive(Error, Debug)]
pub enum VigilError {
    /// I/O errors (reading query files, configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Parse errors (malformed fingerprints, query files)
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with VigilError.
pub type Result<T> = std::result::Result<T, VigilError>;

impl VigilError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        VigilError::Analysis(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        VigilError::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = VigilError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = VigilError::parse("bad hex");
        assert_eq!(error.to_string(), "Parse error: bad hex");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let vigil_error = VigilError::from(io_error);

        match vigil_error {
            VigilError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}

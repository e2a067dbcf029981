//! Error types for the criteria compiler.
//!
//! Compilation itself is total; errors only arise while building predicates
//! from untyped input, reading criteria from files, or loading configuration.
//!
//! # Examples
//!
//! ```
//! use ckan_solr::error::{CriteriaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(CriteriaError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

use crate::criteria::predicate::Operation;

/// The main error type for criteria operations.
#[derive(Error, Debug)]
pub enum CriteriaError {
    /// A predicate payload whose shape does not match its operation.
    #[error("Malformed {operation} predicate: expected {expected}")]
    MalformedPredicate {
        operation: Operation,
        expected: &'static str,
    },

    /// Invalid argument supplied by the caller.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors (reading criteria or config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with CriteriaError.
pub type Result<T> = std::result::Result<T, CriteriaError>;

impl CriteriaError {
    /// Create a new malformed predicate error.
    pub fn malformed(operation: Operation, expected: &'static str) -> Self {
        CriteriaError::MalformedPredicate {
            operation,
            expected,
        }
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        CriteriaError::InvalidArgument(msg.into())
    }
}

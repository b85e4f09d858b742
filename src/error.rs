//! Error types for the Palaver library.
//!
//! All fallible operations in the crate return [`Result`], with
//! [`PalaverError`] as the shared error type.
//!
//! # Examples
//!
//! ```
//! use palaver::error::{PalaverError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PalaverError::config("missing response category"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Palaver operations.
#[derive(Error, Debug)]
pub enum PalaverError {
    /// I/O errors (terminal, network stream, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Intent/response table configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis-related errors (tokenization, filtering, stemming)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Summary lookup errors that are not plain transport failures
    #[error("Lookup error: {0}")]
    Lookup(String),

    /// HTTP transport and response decoding errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with PalaverError.
pub type Result<T> = std::result::Result<T, PalaverError>;

impl PalaverError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        PalaverError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        PalaverError::Analysis(msg.into())
    }

    /// Create a new lookup error.
    pub fn lookup<S: Into<String>>(msg: S) -> Self {
        PalaverError::Lookup(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PalaverError::Other(msg.into())
    }
}

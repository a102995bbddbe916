//! Error types for sample-schema
//!
//! Inference itself never fails; every error here comes from the
//! surrounding file handling or configuration.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for sample-schema
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("Failed to read '{}': {source}", path.display())]
    InputRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in '{}': {source}", path.display())]
    InputParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid sample document: {message}")]
    InvalidDocument { message: String },

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("Failed to write '{}': {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize schema: {0}")]
    Serialize(#[from] serde_json::Error),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid document error
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            message: message.into(),
        }
    }

    /// Create an input read error
    pub fn input_read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::InputRead {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an input parse error
    pub fn input_parse(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::InputParse {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an output write error
    pub fn output_write(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Check if the sample document could not be read or understood
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::InputRead { .. } | Error::InputParse { .. } | Error::InvalidDocument { .. }
        )
    }

    /// Check if the schema could not be written
    pub fn is_output_error(&self) -> bool {
        matches!(self, Error::OutputWrite { .. } | Error::Serialize(_))
    }
}

/// Result type alias for sample-schema
pub type Result<T> = std::result::Result<T, Error>;

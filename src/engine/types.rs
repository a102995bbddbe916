//! Engine types

use std::path::PathBuf;

/// Summary of a completed generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Where the schema was written
    pub schema_path: PathBuf,
    /// Keys directly under the message
    pub top_level_keys: usize,
    /// Descriptors at any depth
    pub descriptors: usize,
    /// Size of the written schema
    pub bytes_written: usize,
}

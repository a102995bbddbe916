//! Generator configuration
//!
//! Everything the command line decides (where the sample lives, where the
//! schema goes, which key holds the message) is captured here and handed to
//! the engine, so inference stays a pure function of its input.

use crate::error::{Error, Result};
use crate::schema::SchemaInferrer;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory sample files are resolved against when only a name is given
pub const DEFAULT_DATA_DIR: &str = "data";

/// Top-level key whose value is inferred
pub const DEFAULT_MESSAGE_KEY: &str = "message";

/// Path segment replaced when deriving the schema path
const DATA_SEGMENT: &str = "data";
const SCHEMA_SEGMENT: &str = "schema";

/// Serialization style for the written schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaFormat {
    /// Single line, no whitespace
    #[default]
    Compact,
    /// Indented, for reading or hand annotation
    Pretty,
}

/// Configuration for one schema generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Sample document to read
    pub input_path: PathBuf,

    /// Destination of the generated schema
    pub schema_path: PathBuf,

    /// Top-level key holding the message to infer
    #[serde(default = "default_message_key")]
    pub message_key: String,

    /// Output serialization style
    #[serde(default)]
    pub format: SchemaFormat,

    /// Classify booleans as integers
    #[serde(default)]
    pub bool_as_integer: bool,
}

fn default_message_key() -> String {
    DEFAULT_MESSAGE_KEY.to_string()
}

impl GeneratorConfig {
    /// Create a config with explicit input and schema paths
    pub fn new(input_path: impl Into<PathBuf>, schema_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            schema_path: schema_path.into(),
            message_key: default_message_key(),
            format: SchemaFormat::default(),
            bool_as_integer: false,
        }
    }

    /// Create a config for an explicit input path, deriving the schema path
    pub fn from_path(input_path: impl Into<PathBuf>) -> Result<Self> {
        let input_path = input_path.into();
        let schema_path = derive_schema_path(&input_path)?;
        Ok(Self::new(input_path, schema_path))
    }

    /// Create a config for a file name inside `data_dir`
    pub fn from_file_name(name: impl AsRef<Path>, data_dir: impl AsRef<Path>) -> Result<Self> {
        Self::from_path(data_dir.as_ref().join(name))
    }

    /// Override the schema path
    #[must_use]
    pub fn with_schema_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.schema_path = path.into();
        self
    }

    /// Set the top-level message key
    #[must_use]
    pub fn with_message_key(mut self, key: impl Into<String>) -> Self {
        self.message_key = key.into();
        self
    }

    /// Set the output format
    #[must_use]
    pub fn with_format(mut self, format: SchemaFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable/disable classifying booleans as integers
    #[must_use]
    pub fn with_bool_as_integer(mut self, enabled: bool) -> Self {
        self.bool_as_integer = enabled;
        self
    }

    /// Build the inferrer described by this config
    pub fn inferrer(&self) -> SchemaInferrer {
        SchemaInferrer::new().with_bool_as_integer(self.bool_as_integer)
    }
}

/// Derive the schema path by replacing the first `data` in the input path
/// with `schema`.
///
/// Fails when there is nothing to replace, since the result would point at
/// the sample itself.
pub fn derive_schema_path(input: &Path) -> Result<PathBuf> {
    let raw = input.to_str().ok_or_else(|| {
        Error::config(format!(
            "Input path is not valid UTF-8: {}",
            input.display()
        ))
    })?;

    if !raw.contains(DATA_SEGMENT) {
        return Err(Error::config(format!(
            "Cannot derive a schema path from '{raw}' (no '{DATA_SEGMENT}' segment); \
             pass an explicit output path"
        )));
    }

    Ok(PathBuf::from(raw.replacen(DATA_SEGMENT, SCHEMA_SEGMENT, 1)))
}

//! Schema file writer
//!
//! The schema is written to a temporary file next to the destination and
//! then renamed over it, so a failed write never leaves a truncated schema.
//! The result gets the permissions a plain create would: an existing file
//! keeps its mode, a new one gets 0666 minus the umask.

use crate::config::SchemaFormat;
use crate::error::{Error, Result};
use crate::schema::Schema;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::{Builder, NamedTempFile};
use tracing::debug;

/// Schema file writer
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaWriter {
    format: SchemaFormat,
}

impl SchemaWriter {
    /// Create a writer producing compact JSON
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format
    #[must_use]
    pub fn with_format(mut self, format: SchemaFormat) -> Self {
        self.format = format;
        self
    }

    /// Get the output format
    pub fn format(&self) -> SchemaFormat {
        self.format
    }

    /// Render a schema to a JSON string
    pub fn render(&self, schema: &Schema) -> Result<String> {
        let rendered = match self.format {
            SchemaFormat::Compact => serde_json::to_string(schema)?,
            SchemaFormat::Pretty => serde_json::to_string_pretty(schema)?,
        };
        Ok(rendered)
    }

    /// Write a schema to `path`, returning the number of bytes written.
    ///
    /// The parent directory must already exist.
    pub fn write(&self, schema: &Schema, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let rendered = self.render(schema)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = staging_file(dir, path).map_err(|e| Error::output_write(path, e))?;
        debug!("Staging schema in {}", file.path().display());

        file.write_all(rendered.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| Error::output_write(path, e))?;

        file.persist(path)
            .map_err(|e| Error::output_write(path, e.error))?;

        Ok(rendered.len())
    }
}

/// Create the temporary file the schema is staged in
fn staging_file(dir: &Path, target: &Path) -> std::io::Result<NamedTempFile> {
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Subject to the umask, like a plain create
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let file = builder.tempfile_in(dir)?;
    if let Ok(existing) = fs::metadata(target) {
        file.as_file().set_permissions(existing.permissions())?;
    }
    Ok(file)
}

/// Render a schema to a JSON string (convenience function)
pub fn render_schema(schema: &Schema, format: SchemaFormat) -> Result<String> {
    SchemaWriter::new().with_format(format).render(schema)
}

/// Write a schema file (convenience function)
pub fn write_schema(
    schema: &Schema,
    path: impl AsRef<Path>,
    format: SchemaFormat,
) -> Result<usize> {
    SchemaWriter::new().with_format(format).write(schema, path)
}

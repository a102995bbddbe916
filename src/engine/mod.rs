//! Execution engine module
//!
//! Ties loading, inference and output together for one sample file.
//!
//! # Overview
//!
//! The engine module provides:
//! - `SchemaEngine` - Reads a sample, infers its schema and writes it
//! - `GenerationReport` - What a run produced

mod types;

pub use types::GenerationReport;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::loader::{extract_message, load_document};
use crate::output::SchemaWriter;
use crate::schema::Schema;
use crate::types::JsonValue;
use tracing::{debug, info};

/// Schema generation engine
#[derive(Debug, Clone)]
pub struct SchemaEngine {
    config: GeneratorConfig,
}

impl SchemaEngine {
    /// Create a new engine
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Infer the schema of an already parsed sample document
    pub fn generate_from_document(&self, document: &JsonValue) -> Result<Schema> {
        let message = extract_message(document, &self.config.message_key)?;
        debug!(
            "Inferring schema for {} key(s) under '{}'",
            message.len(),
            self.config.message_key
        );
        Ok(self.config.inferrer().infer(&message))
    }

    /// Read the sample file and infer its schema without writing anything
    pub fn generate(&self) -> Result<Schema> {
        debug!("Reading sample {}", self.config.input_path.display());
        let document = load_document(&self.config.input_path)?;
        self.generate_from_document(&document)
    }

    /// Read, infer and write the schema file
    pub fn run(&self) -> Result<GenerationReport> {
        let schema = self.generate()?;

        let bytes_written = SchemaWriter::new()
            .with_format(self.config.format)
            .write(&schema, &self.config.schema_path)?;

        let report = GenerationReport {
            schema_path: self.config.schema_path.clone(),
            top_level_keys: schema.len(),
            descriptors: schema.descriptor_count(),
            bytes_written,
        };

        info!(
            "Wrote schema with {} attribute(s) to {} ({} bytes)",
            report.descriptors,
            report.schema_path.display(),
            report.bytes_written
        );

        Ok(report)
    }
}

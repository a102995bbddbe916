//! CLI runner - executes the generation

use crate::cli::commands::Cli;
use crate::config::{derive_schema_path, GeneratorConfig};
use crate::engine::{GenerationReport, SchemaEngine};
use crate::error::{Error, Result};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<GenerationReport> {
        let config = self.build_config()?;
        let report = SchemaEngine::new(config).run()?;

        println!(
            "Schema generated successfully and saved in {}",
            report.schema_path.display()
        );

        Ok(report)
    }

    /// Build the generator config from the parsed arguments
    pub fn build_config(&self) -> Result<GeneratorConfig> {
        let input = match (&self.cli.path, &self.cli.filename) {
            (Some(path), _) => path.clone(),
            (None, Some(name)) => self.cli.data_dir.join(name),
            (None, None) => {
                return Err(Error::config(
                    "No input given (pass a file name or --path)",
                ))
            }
        };

        let schema_path = match &self.cli.output {
            Some(output) => output.clone(),
            None => derive_schema_path(&input)?,
        };

        Ok(GeneratorConfig::new(input, schema_path)
            .with_message_key(self.cli.message_key.clone())
            .with_format(self.cli.format.into())
            .with_bool_as_integer(self.cli.legacy_bools))
    }
}

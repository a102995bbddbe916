//! CLI arguments

use crate::config::{SchemaFormat, DEFAULT_DATA_DIR, DEFAULT_MESSAGE_KEY};
use clap::Parser;
use std::path::PathBuf;

/// Generate a JSON schema from a sample JSON file
#[derive(Parser, Debug)]
#[command(name = "sample-schema")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File name containing JSON data (resolved inside the data directory)
    #[arg(required_unless_present = "path", conflicts_with = "path")]
    pub filename: Option<PathBuf>,

    /// Directory sample files are read from
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Explicit sample file path (bypasses the data directory)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Schema output path (default: input path with `data` replaced by `schema`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Top-level key holding the message to infer
    #[arg(long, default_value = DEFAULT_MESSAGE_KEY)]
    pub message_key: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Compact)]
    pub format: OutputFormat,

    /// Classify booleans as integers
    #[arg(long)]
    pub legacy_bools: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Single-line JSON
    Compact,
    /// Indented JSON
    Pretty,
}

impl From<OutputFormat> for SchemaFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Compact => SchemaFormat::Compact,
            OutputFormat::Pretty => SchemaFormat::Pretty,
        }
    }
}

//! CLI module
//!
//! Command-line interface for generating a schema from a sample file.
//!
//! ```text
//! sample-schema event.json                 # data/event.json -> schema/event.json
//! sample-schema --path tests/test_data.json
//! sample-schema event.json -o out.json -f pretty
//! ```

mod commands;
mod runner;

pub use commands::{Cli, OutputFormat};
pub use runner::Runner;

//! Resolved run configuration

use crate::cli::{Cli, OutputFormat};
use std::path::PathBuf;

/// Default input file, relative to the working directory
pub const DEFAULT_INPUT: &str = "race-results.txt";

/// What to read and how to report it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub format: OutputFormat,
    /// List each participant's races in the roster
    pub show_results: bool,
    /// Print rejected records in text output
    pub show_rejections: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            format: OutputFormat::Text,
            show_results: false,
            show_rejections: true,
        }
    }
}

impl From<&Cli> for RunConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            input: cli.input.clone(),
            format: cli.format,
            show_results: cli.show_results,
            show_rejections: !cli.quiet,
        }
    }
}

//! CLI argument parsing for Winners

use crate::config::DEFAULT_INPUT;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the tournament report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    #[default]
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "winners")]
#[command(version)]
#[command(about = "Validate race timing records and announce the fastest all-round participants", long_about = None)]
pub struct Cli {
    /// Race results file (`name,id,startTime,endTime,raceType` per line)
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output format (text, json or csv)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// List every race under each participant in the roster
    #[arg(long = "show-results")]
    pub show_results: bool,

    /// Do not print rejected records (text output only)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Enable debug tracing output on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

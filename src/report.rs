//! Report rendering dispatch

use crate::cli::OutputFormat;
use crate::config::RunConfig;
use crate::csv_output::CsvOutput;
use crate::ingest::Tournament;
use crate::json_output::JsonOutput;
use crate::text_output::TextOutput;
use anyhow::{Context, Result};

/// Render the tournament in the configured format
pub fn render(config: &RunConfig, tournament: &Tournament) -> Result<String> {
    let podium = tournament.podium();
    let rendered = match config.format {
        OutputFormat::Text => {
            TextOutput::new(config.show_results, config.show_rejections)
                .render(tournament, &podium)
        }
        OutputFormat::Json => JsonOutput::new(tournament, &podium)
            .to_json()
            .context("Failed to serialize JSON report")?,
        OutputFormat::Csv => CsvOutput::new(tournament, &podium).to_csv(),
    };
    Ok(rendered)
}

/// Ingest the configured input file and render it
pub fn run(config: &RunConfig) -> Result<String> {
    let tournament = Tournament::from_file(&config.input)?;
    render(config, &tournament)
}

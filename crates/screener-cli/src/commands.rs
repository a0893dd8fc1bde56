use std::path::Path;

use screener_core::models::screening::ScreeningRequest;
use screener_instruments::{all_instruments, evaluate, get_instrument};
use serde::Serialize;

use crate::config::{self, OutputFormat, ScreenerConfig};

#[derive(Serialize)]
struct InstrumentSummary<'a> {
    id: &'a str,
    abbreviation: &'a str,
    disorder_name: &'a str,
    max_score: u32,
}

/// One line per registered instrument.
pub fn list(format: OutputFormat) -> eyre::Result<String> {
    let instruments = all_instruments();
    match format {
        OutputFormat::Json => {
            let summaries: Vec<_> = instruments
                .iter()
                .map(|i| InstrumentSummary {
                    id: i.id(),
                    abbreviation: i.abbreviation(),
                    disorder_name: i.disorder_name(),
                    max_score: i.max_score(),
                })
                .collect();
            Ok(serde_json::to_string_pretty(&summaries)?)
        }
        OutputFormat::Text => Ok(instruments
            .iter()
            .map(|i| {
                format!(
                    "{:<6} {:<6} {} (max {})",
                    i.id(),
                    i.abbreviation(),
                    i.disorder_name(),
                    i.max_score()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// The validation schema of one instrument as JSON.
pub fn schema(id: &str) -> eyre::Result<String> {
    let instrument =
        get_instrument(id).ok_or_else(|| eyre::eyre!("instrument not found: {id}"))?;
    Ok(serde_json::to_string_pretty(instrument.schema())?)
}

/// Evaluate a JSON-encoded [`ScreeningRequest`].
pub fn score(input: &str, config: &ScreenerConfig, format: OutputFormat) -> eyre::Result<String> {
    let request = ScreeningRequest::from_json(input)?;
    let report = evaluate(&request, &config.evaluation_options())?;
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            let instrument = get_instrument(&report.instrument_id)
                .ok_or_else(|| eyre::eyre!("instrument not found: {}", report.instrument_id))?;
            Ok(instrument.to_text(&report))
        }
    }
}

/// Write a default config to `path`. Refuses to overwrite unless `force`.
pub fn config_init(path: &Path, force: bool) -> eyre::Result<String> {
    if path.exists() && !force {
        return Err(eyre::eyre!(
            "config already exists at {} (pass --force to overwrite)",
            path.display()
        ));
    }
    config::save_config(path, &ScreenerConfig::default())?;
    Ok(format!("wrote {}", path.display()))
}

pub fn config_show(config: &ScreenerConfig) -> eyre::Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}

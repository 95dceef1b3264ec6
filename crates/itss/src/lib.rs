//! ITSS - Insider Trade Suspicion Scorer
//!
//! Scores a single insider trade on five attributes, classifies the weighted
//! composite as Routine, Moderate or Suspicious, and renders a textual
//! breakdown plus a radar chart.
//!
//! # Library Usage
//!
//! ```rust,no_run
//! use itss::models::{ItssConfig, TradeInput};
//! use itss::report::OutputFormat;
//!
//! # fn main() -> Result<(), itss::ItssError> {
//! let config = ItssConfig::default();
//! let scorer = itss::build_scorer(&config)?;
//! let report = itss::assess(&scorer, &TradeInput::default())?;
//! let view = itss::render(&report, OutputFormat::Text, &config)?;
//! println!("{}", view.body);
//! # Ok(())
//! # }
//! ```

pub use itss_models as models;
pub use itss_report as report;
pub use itss_scorer as scorer;

use std::path::Path;

use itss_models::{AssessmentReport, ItssConfig, TradeInput};
use itss_report::{OutputFormat, RenderError, RenderedView};
use itss_scorer::{ScoreError, Scorer};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ItssError {
    #[error(transparent)]
    Score(#[from] ScoreError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Load configuration from a TOML file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<ItssConfig, ItssError> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&raw)?)
        }
        None => Ok(ItssConfig::default()),
    }
}

/// Build a Scorer from configuration, validating the scoring parameters.
pub fn build_scorer(config: &ItssConfig) -> Result<Scorer, ItssError> {
    Ok(Scorer::new(config.scoring.clone())?)
}

/// Validate and score one submission.
pub fn assess(scorer: &Scorer, input: &TradeInput) -> Result<AssessmentReport, ItssError> {
    let assessment = itss_scorer::validate(input)?;
    let breakdown = scorer.score(&assessment);
    let report = AssessmentReport::new(assessment, *scorer.weights(), breakdown);

    info!(
        id = %report.id,
        composite = %report.breakdown.composite,
        classification = %report.breakdown.classification,
        "Assessment complete"
    );

    Ok(report)
}

/// Render a report in the requested format, together with its radar chart.
pub fn render(
    report: &AssessmentReport,
    format: OutputFormat,
    config: &ItssConfig,
) -> Result<RenderedView, ItssError> {
    Ok(itss_report::render(report, format, config)?)
}

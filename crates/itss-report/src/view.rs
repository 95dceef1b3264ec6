use itss_models::{AssessmentReport, ItssConfig};
use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::radar::RadarChart;
use crate::text::{render_markdown, render_text};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
    /// Indented JSON.
    JsonPretty,
}

/// The complete result view for one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedView {
    /// Score, classification, progress bar and breakdown in the chosen format.
    pub body: String,
    /// Standalone SVG document of the radar chart.
    pub chart_svg: String,
}

pub fn render(
    report: &AssessmentReport,
    format: OutputFormat,
    config: &ItssConfig,
) -> Result<RenderedView, RenderError> {
    let body = match format {
        OutputFormat::Text => render_text(report, &config.report)?,
        OutputFormat::Markdown => render_markdown(report, &config.report)?,
        OutputFormat::Json => serde_json::to_string(report)?,
        OutputFormat::JsonPretty => serde_json::to_string_pretty(report)?,
    };
    let chart_svg =
        RadarChart::from_scores(&report.breakdown.components, &config.chart).to_svg()?;

    Ok(RenderedView { body, chart_svg })
}

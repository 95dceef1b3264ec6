use std::fmt::Write;

use itss_models::{AssessmentReport, Component, ComponentScores, ReportConfig};
use rust_decimal::Decimal;

use crate::error::RenderError;
use crate::progress::progress_bar;

/// Format with exactly two decimal places, rounding half to even.
pub(crate) fn two_places(value: Decimal) -> String {
    let mut rounded = value.round_dp(2);
    rounded.rescale(2);
    rounded.to_string()
}

/// Breakdown value for one component.
///
/// The plan line reports whether a plan was used ("Yes"/"No"), which is the
/// inverse of its suspicion score, followed by the score itself.
fn component_value(scores: &ComponentScores, component: Component) -> String {
    let value = two_places(scores.get(component));
    match component {
        Component::PrearrangedPlan => {
            let used = if scores.plan_used() { "Yes" } else { "No" };
            format!("{used} (score {value})")
        }
        _ => value,
    }
}

fn classification_text(report: &AssessmentReport, config: &ReportConfig) -> String {
    let classification = report.breakdown.classification;
    if config.show_icons {
        format!("{} {}", classification.icon(), classification.label())
    } else {
        classification.label().to_string()
    }
}

/// Plain-text report for terminals.
pub fn render_text(
    report: &AssessmentReport,
    config: &ReportConfig,
) -> Result<String, RenderError> {
    let breakdown = &report.breakdown;
    let label_width = Component::ALL
        .iter()
        .map(|c| c.breakdown_label().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    writeln!(out, "Insider Trade Suspicion Scorer")?;
    writeln!(out, "==============================")?;
    writeln!(out, "Suspicion Score: {}", two_places(breakdown.composite))?;
    writeln!(out, "Classification:  {}", classification_text(report, config))?;
    writeln!(out, "{}", progress_bar(breakdown.composite, config.progress_width))?;
    writeln!(out)?;
    writeln!(out, "Explanation of Components")?;
    writeln!(out, "-------------------------")?;
    for component in Component::ALL {
        writeln!(
            out,
            "  {:<width$}  {}",
            component.breakdown_label(),
            component_value(&breakdown.components, component),
            width = label_width
        )?;
    }
    Ok(out)
}

/// Markdown report mirroring the layout of the web form's result panel.
pub fn render_markdown(
    report: &AssessmentReport,
    config: &ReportConfig,
) -> Result<String, RenderError> {
    let breakdown = &report.breakdown;
    let (score_icon, breakdown_icon) = if config.show_icons {
        ("🎯 ", "🔍 ")
    } else {
        ("", "")
    };

    let mut out = String::new();
    writeln!(
        out,
        "### {score_icon}Suspicion Score: **{}**",
        two_places(breakdown.composite)
    )?;
    writeln!(
        out,
        "### Classification: **{}**",
        classification_text(report, config)
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "`{}`",
        progress_bar(breakdown.composite, config.progress_width)
    )?;
    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out, "#### {breakdown_icon}Explanation of Components")?;
    for component in Component::ALL {
        writeln!(
            out,
            "- **{}**: {}",
            component.breakdown_label(),
            component_value(&breakdown.components, component)
        )?;
    }
    Ok(out)
}

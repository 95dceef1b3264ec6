use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assessment::Component;
use crate::constants::*;

/// Top-level configuration for ITSS. Every table is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ItssConfig {
    pub scoring: ScoringConfig,
    pub chart: ChartConfig,
    pub report: ReportConfig,
}

/// Parameters of the suspicion formula.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    /// USD value at which trade size and past average saturate.
    pub normalization_cap_usd: Decimal,
    /// Delay in days at which the reporting speed score reaches 0.
    pub max_reporting_delay_days: u32,
    pub moderate_threshold: Decimal,
    pub suspicious_threshold: Decimal,
    pub weights: ComponentWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            normalization_cap_usd: NORMALIZATION_CAP_USD,
            max_reporting_delay_days: MAX_REPORTING_DELAY_DAYS,
            moderate_threshold: MODERATE_THRESHOLD,
            suspicious_threshold: SUSPICIOUS_THRESHOLD,
            weights: ComponentWeights::default(),
        }
    }
}

/// Weight of each component in the composite score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ComponentWeights {
    pub trade_size: Decimal,
    pub reporting_speed: Decimal,
    pub exec_level: Decimal,
    pub prearranged_plan: Decimal,
    pub past_behavior: Decimal,
}

impl ComponentWeights {
    pub fn get(&self, component: Component) -> Decimal {
        match component {
            Component::TradeSize => self.trade_size,
            Component::ReportingSpeed => self.reporting_speed,
            Component::ExecLevel => self.exec_level,
            Component::PrearrangedPlan => self.prearranged_plan,
            Component::PastBehavior => self.past_behavior,
        }
    }

    pub fn total(&self) -> Decimal {
        Component::ALL.iter().map(|c| self.get(*c)).sum()
    }
}

impl Default for ComponentWeights {
    fn default() -> Self {
        Self {
            trade_size: WEIGHT_TRADE_SIZE,
            reporting_speed: WEIGHT_REPORTING_SPEED,
            exec_level: WEIGHT_EXEC_LEVEL,
            prearranged_plan: WEIGHT_PREARRANGED_PLAN,
            past_behavior: WEIGHT_PAST_BEHAVIOR,
        }
    }
}

/// Styling of the radar chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    /// Width and height of the square SVG canvas in pixels.
    pub size_px: u32,
    pub title: String,
    pub title_color: String,
    pub line_color: String,
    pub line_width: f64,
    pub marker_radius: f64,
    /// Opacity of the filled polygon, 0.0 to 1.0.
    pub fill_opacity: f64,
    pub figure_background: String,
    pub plot_background: String,
    pub grid_color: String,
    pub grid_opacity: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            size_px: 600,
            title: "Component Breakdown Radar".to_string(),
            title_color: "#333333".to_string(),
            line_color: "#FF4B4B".to_string(),
            line_width: 2.5,
            marker_radius: 3.0,
            fill_opacity: 0.3,
            figure_background: "#f9f9f9".to_string(),
            plot_background: "#ffffff".to_string(),
            grid_color: "gray".to_string(),
            grid_opacity: 0.4,
        }
    }
}

/// Options for the textual report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// Number of cells in the progress bar.
    pub progress_width: usize,
    /// Prefix the classification label with its icon.
    pub show_icons: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            progress_width: 30,
            show_icons: true,
        }
    }
}

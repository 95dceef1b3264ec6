use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The five scored components, in radar-axis order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    TradeSize,
    ReportingSpeed,
    ExecLevel,
    PrearrangedPlan,
    PastBehavior,
}

impl Component {
    pub const ALL: [Component; 5] = [
        Component::TradeSize,
        Component::ReportingSpeed,
        Component::ExecLevel,
        Component::PrearrangedPlan,
        Component::PastBehavior,
    ];

    /// Short name used for radar axis labels.
    pub fn axis_label(self) -> &'static str {
        match self {
            Component::TradeSize => "Trade Size",
            Component::ReportingSpeed => "Reporting Speed",
            Component::ExecLevel => "Exec Level",
            Component::PrearrangedPlan => "10b5-1 Plan",
            Component::PastBehavior => "Past Behavior",
        }
    }

    /// Long name used in the textual breakdown.
    pub fn breakdown_label(self) -> &'static str {
        match self {
            Component::TradeSize => "Trade Size Percentile",
            Component::ReportingSpeed => "Reporting Speed Score",
            Component::ExecLevel => "Executive Level",
            Component::PrearrangedPlan => "10b5-1 Plan Used",
            Component::PastBehavior => "Past Trade Behavior Score",
        }
    }
}

/// Normalized component scores, each in [0, 1]. Higher means more suspicious.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComponentScores {
    pub trade_size: Decimal,
    pub reporting_speed: Decimal,
    pub exec_level: Decimal,
    /// 0 when a pre-scheduled plan was used, 1 otherwise.
    pub prearranged_plan: Decimal,
    pub past_behavior: Decimal,
}

impl ComponentScores {
    pub fn get(&self, component: Component) -> Decimal {
        match component {
            Component::TradeSize => self.trade_size,
            Component::ReportingSpeed => self.reporting_speed,
            Component::ExecLevel => self.exec_level,
            Component::PrearrangedPlan => self.prearranged_plan,
            Component::PastBehavior => self.past_behavior,
        }
    }

    /// `(component, score)` pairs in radar-axis order.
    pub fn iter(&self) -> impl Iterator<Item = (Component, Decimal)> + '_ {
        Component::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Whether the submitted trade used a pre-scheduled plan, recovered from
    /// the suspicion-oriented plan score.
    pub fn plan_used(&self) -> bool {
        self.prearranged_plan.is_zero()
    }
}

/// Suspicion band of a composite score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Routine,
    Moderate,
    Suspicious,
}

impl Classification {
    pub fn label(self) -> &'static str {
        match self {
            Classification::Routine => "Routine",
            Classification::Moderate => "Moderate",
            Classification::Suspicious => "Suspicious",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Classification::Routine => "✅",
            Classification::Moderate => "⚠️",
            Classification::Suspicious => "🚨",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of scoring one trade.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub components: ComponentScores,
    /// Weighted sum of the components, rounded to 2 decimal places.
    pub composite: Decimal,
    pub classification: Classification,
}

pub mod assessment;
pub mod config;
pub mod constants;
pub mod report;
pub mod trade_input;

pub use assessment::{Classification, Component, ComponentScores, ScoreBreakdown};
pub use config::{ChartConfig, ComponentWeights, ItssConfig, ReportConfig, ScoringConfig};
pub use report::AssessmentReport;
pub use trade_input::{TradeAssessment, TradeInput};

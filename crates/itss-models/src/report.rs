use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assessment::ScoreBreakdown;
use crate::config::ComponentWeights;
use crate::trade_input::TradeAssessment;

pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Everything produced for one submission.
///
/// `id` and `assessed_at` identify the submission; `breakdown` depends only
/// on `input` and `weights`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssessmentReport {
    pub id: Uuid,
    pub schema_version: u32,
    pub assessed_at: DateTime<Utc>,
    pub input: TradeAssessment,
    pub weights: ComponentWeights,
    pub breakdown: ScoreBreakdown,
}

impl AssessmentReport {
    pub fn new(
        input: TradeAssessment,
        weights: ComponentWeights,
        breakdown: ScoreBreakdown,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            schema_version: REPORT_SCHEMA_VERSION,
            assessed_at: Utc::now(),
            input,
            weights,
            breakdown,
        }
    }
}

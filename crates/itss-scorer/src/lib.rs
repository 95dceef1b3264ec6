pub mod error;
pub mod normalize;
pub mod scorer;
pub mod validate;

pub mod test_support;

pub use error::ScoreError;
pub use itss_models::constants;
pub use scorer::Scorer;
pub use validate::validate;

use itss_models::{ScoreBreakdown, TradeAssessment};

/// Score a validated trade with the fixed default weights.
pub fn score(assessment: &TradeAssessment) -> ScoreBreakdown {
    Scorer::default().score(assessment)
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A trade as submitted, before any constraint checks.
///
/// The delay is signed so that a negative value reaches the input boundary
/// and is reported there instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeInput {
    /// Trade value in USD.
    pub trade_value: Decimal,
    /// Days between the trade and its public filing.
    pub reporting_delay_days: i64,
    pub is_high_level_executive: bool,
    /// True when the trade was executed under a pre-scheduled (10b5-1) plan.
    pub used_prearranged_plan: bool,
    /// Average value of this insider's past trades in USD.
    pub past_average_trade_value: Decimal,
}

impl Default for TradeInput {
    /// Matches the initial state of the input form: nothing entered,
    /// not an executive, plan used.
    fn default() -> Self {
        Self {
            trade_value: Decimal::ZERO,
            reporting_delay_days: 0,
            is_high_level_executive: false,
            used_prearranged_plan: true,
            past_average_trade_value: Decimal::ZERO,
        }
    }
}

/// A trade that passed the input boundary. All numeric fields are non-negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeAssessment {
    pub trade_value: Decimal,
    pub reporting_delay_days: u32,
    pub is_high_level_executive: bool,
    pub used_prearranged_plan: bool,
    pub past_average_trade_value: Decimal,
}

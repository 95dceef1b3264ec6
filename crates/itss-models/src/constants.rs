//! Fixed scoring constants.
//!
//! These are the defaults of [`crate::config::ScoringConfig`]. The five
//! weights sum to exactly 1.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const WEIGHT_TRADE_SIZE: Decimal = dec!(0.30);
pub const WEIGHT_REPORTING_SPEED: Decimal = dec!(0.25);
pub const WEIGHT_EXEC_LEVEL: Decimal = dec!(0.15);
pub const WEIGHT_PREARRANGED_PLAN: Decimal = dec!(0.10);
pub const WEIGHT_PAST_BEHAVIOR: Decimal = dec!(0.20);

/// Trade values (current and past average) at or above this saturate to 1.
pub const NORMALIZATION_CAP_USD: Decimal = dec!(1000000);

/// Reporting delays at or beyond this many days contribute no speed suspicion.
pub const MAX_REPORTING_DELAY_DAYS: u32 = 10;

/// Lower bound (inclusive) of the Moderate band.
pub const MODERATE_THRESHOLD: Decimal = dec!(0.40);

/// Lower bound (inclusive) of the Suspicious band.
pub const SUSPICIOUS_THRESHOLD: Decimal = dec!(0.70);

/// Decimal places kept in the composite score.
pub const COMPOSITE_SCALE: u32 = 2;

//! Per-component normalization. Every function returns a value in [0, 1],
//! where 1 is the most suspicious reading.

use rust_decimal::Decimal;

/// Clamp to the closed unit interval.
pub fn clamp_unit(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO).min(Decimal::ONE)
}

/// `value / cap`, saturating at 1. A zero cap saturates immediately.
fn capped_ratio(value: Decimal, cap: Decimal) -> Decimal {
    value.checked_div(cap).map_or(Decimal::ONE, clamp_unit)
}

/// Trade value relative to the normalization cap.
pub fn size_score(trade_value: Decimal, cap_usd: Decimal) -> Decimal {
    capped_ratio(trade_value, cap_usd)
}

/// 1 for same-day reporting, falling linearly to 0 at `max_delay_days`.
pub fn speed_score(reporting_delay_days: u32, max_delay_days: u32) -> Decimal {
    Decimal::ONE
        - capped_ratio(
            Decimal::from(reporting_delay_days),
            Decimal::from(max_delay_days),
        )
}

pub fn exec_score(is_high_level_executive: bool) -> Decimal {
    if is_high_level_executive {
        Decimal::ONE
    } else {
        Decimal::ZERO
    }
}

/// A pre-scheduled plan removes this component's suspicion entirely.
pub fn plan_score(used_prearranged_plan: bool) -> Decimal {
    if used_prearranged_plan {
        Decimal::ZERO
    } else {
        Decimal::ONE
    }
}

/// Insider's historical average trade value relative to the cap.
pub fn past_average_score(past_average_trade_value: Decimal, cap_usd: Decimal) -> Decimal {
    capped_ratio(past_average_trade_value, cap_usd)
}

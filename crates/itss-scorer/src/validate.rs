use itss_models::{TradeAssessment, TradeInput};
use rust_decimal::Decimal;
use tracing::warn;

use crate::error::ScoreError;

/// Check a submitted trade against the input constraints.
///
/// Fields are checked in form order and the first negative value is reported.
/// Delays beyond `u32::MAX` days saturate; they score the same as any delay
/// past the reporting horizon.
pub fn validate(input: &TradeInput) -> Result<TradeAssessment, ScoreError> {
    non_negative("trade_value", input.trade_value)?;

    if input.reporting_delay_days < 0 {
        warn!(
            reporting_delay_days = input.reporting_delay_days,
            "Rejected negative reporting delay"
        );
        return Err(ScoreError::InputConstraintViolation {
            field: "reporting_delay_days",
            value: input.reporting_delay_days.to_string(),
        });
    }
    let reporting_delay_days = u32::try_from(input.reporting_delay_days).unwrap_or(u32::MAX);

    non_negative("past_average_trade_value", input.past_average_trade_value)?;

    Ok(TradeAssessment {
        trade_value: input.trade_value,
        reporting_delay_days,
        is_high_level_executive: input.is_high_level_executive,
        used_prearranged_plan: input.used_prearranged_plan,
        past_average_trade_value: input.past_average_trade_value,
    })
}

fn non_negative(field: &'static str, value: Decimal) -> Result<(), ScoreError> {
    if value.is_sign_negative() && !value.is_zero() {
        warn!(field, value = %value, "Rejected negative input");
        return Err(ScoreError::InputConstraintViolation {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn accepts_valid_input() {
        let input = TradeInput {
            trade_value: dec!(250000),
            reporting_delay_days: 4,
            is_high_level_executive: true,
            used_prearranged_plan: false,
            past_average_trade_value: dec!(10000),
        };

        let assessment = validate(&input).unwrap();
        assert_eq!(assessment.trade_value, dec!(250000));
        assert_eq!(assessment.reporting_delay_days, 4);
        assert!(assessment.is_high_level_executive);
        assert!(!assessment.used_prearranged_plan);
        assert_eq!(assessment.past_average_trade_value, dec!(10000));
    }

    #[test]
    fn accepts_blank_form() {
        assert!(validate(&TradeInput::default()).is_ok());
    }

    #[test]
    fn rejects_negative_trade_value() {
        let input = TradeInput {
            trade_value: dec!(-1),
            ..TradeInput::default()
        };

        let err = validate(&input).unwrap_err();
        assert_eq!(
            err,
            ScoreError::InputConstraintViolation {
                field: "trade_value",
                value: "-1".to_string(),
            }
        );
    }

    #[test]
    fn rejects_negative_delay() {
        let input = TradeInput {
            reporting_delay_days: -3,
            ..TradeInput::default()
        };

        let err = validate(&input).unwrap_err();
        assert!(matches!(
            err,
            ScoreError::InputConstraintViolation {
                field: "reporting_delay_days",
                ..
            }
        ));
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn rejects_negative_past_average() {
        let input = TradeInput {
            past_average_trade_value: dec!(-0.01),
            ..TradeInput::default()
        };

        let err = validate(&input).unwrap_err();
        assert!(matches!(
            err,
            ScoreError::InputConstraintViolation {
                field: "past_average_trade_value",
                ..
            }
        ));
    }

    #[test]
    fn reports_first_violation_in_form_order() {
        let input = TradeInput {
            trade_value: dec!(-5),
            reporting_delay_days: -1,
            past_average_trade_value: dec!(-5),
            ..TradeInput::default()
        };

        let err = validate(&input).unwrap_err();
        assert!(matches!(
            err,
            ScoreError::InputConstraintViolation {
                field: "trade_value",
                ..
            }
        ));
    }

    #[test]
    fn negative_zero_is_accepted() {
        let input = TradeInput {
            trade_value: -Decimal::ZERO,
            ..TradeInput::default()
        };
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn huge_delay_saturates() {
        let input = TradeInput {
            reporting_delay_days: i64::MAX,
            ..TradeInput::default()
        };
        assert_eq!(validate(&input).unwrap().reporting_delay_days, u32::MAX);
    }
}

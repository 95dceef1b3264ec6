use itss_models::constants::COMPOSITE_SCALE;
use itss_models::{
    Classification, Component, ComponentScores, ComponentWeights, ScoreBreakdown, ScoringConfig,
    TradeAssessment,
};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::error::ScoreError;
use crate::normalize;

/// Computes component scores, the weighted composite and its classification.
///
/// Holds only a validated [`ScoringConfig`]; scoring never mutates it, so one
/// scorer can serve any number of independent submissions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scorer {
    config: ScoringConfig,
}

impl Scorer {
    /// Build a scorer, rejecting weights or thresholds that could push the
    /// composite outside [0, 1] or make the bands overlap.
    pub fn new(config: ScoringConfig) -> Result<Self, ScoreError> {
        check_config(&config)?;
        Ok(Self { config })
    }

    pub fn weights(&self) -> &ComponentWeights {
        &self.config.weights
    }

    pub fn components(&self, assessment: &TradeAssessment) -> ComponentScores {
        let cap = self.config.normalization_cap_usd;
        let scores = ComponentScores {
            trade_size: normalize::size_score(assessment.trade_value, cap),
            reporting_speed: normalize::speed_score(
                assessment.reporting_delay_days,
                self.config.max_reporting_delay_days,
            ),
            exec_level: normalize::exec_score(assessment.is_high_level_executive),
            prearranged_plan: normalize::plan_score(assessment.used_prearranged_plan),
            past_behavior: normalize::past_average_score(
                assessment.past_average_trade_value,
                cap,
            ),
        };

        for (component, score) in scores.iter() {
            debug!(component = ?component, score = %score, "Normalized component");
        }

        scores
    }

    /// Weighted sum rounded to 2 places.
    ///
    /// The sum is accumulated in `f64`, term by term in component order, and
    /// the resulting binary value is rounded. A sum printed as 0.695 is stored
    /// as 0.69499999999999995 and therefore rounds down to 0.69; only exact
    /// binary ties (0.125) fall back to half-to-even.
    pub fn composite(&self, scores: &ComponentScores) -> Decimal {
        let weights = &self.config.weights;
        let raw: f64 = Component::ALL
            .iter()
            .map(|c| as_f64(weights.get(*c)) * component_f64(*c, scores.get(*c)))
            .sum();

        // Unit scores and finite weights keep `raw` finite
        let mut composite = Decimal::from_f64_retain(raw)
            .unwrap_or_default()
            .round_dp(COMPOSITE_SCALE);
        composite.rescale(COMPOSITE_SCALE);
        composite
    }

    pub fn classify(&self, composite: Decimal) -> Classification {
        if composite < self.config.moderate_threshold {
            Classification::Routine
        } else if composite < self.config.suspicious_threshold {
            Classification::Moderate
        } else {
            Classification::Suspicious
        }
    }

    pub fn score(&self, assessment: &TradeAssessment) -> ScoreBreakdown {
        let components = self.components(assessment);
        let composite = self.composite(&components);
        let classification = self.classify(composite);

        info!(
            composite = %composite,
            classification = %classification,
            "Scored trade"
        );

        ScoreBreakdown {
            components,
            composite,
            classification,
        }
    }
}

/// Nearest `f64` to `value`. Parsing the decimal text is correctly rounded,
/// which `to_f64` does not guarantee for every scale.
fn as_f64(value: Decimal) -> f64 {
    value.to_string().parse().unwrap_or_default()
}

/// Binary value of a component score as the form computes it. Reporting speed
/// is `1 - delay / horizon` evaluated in `f64`, so 1 - 0.7 stays
/// 0.30000000000000004 rather than the nearest double to 0.3.
fn component_f64(component: Component, score: Decimal) -> f64 {
    match component {
        Component::ReportingSpeed => 1.0 - as_f64(Decimal::ONE - score),
        _ => as_f64(score),
    }
}

fn check_config(config: &ScoringConfig) -> Result<(), ScoreError> {
    let weights = &config.weights;
    if let Some(component) = Component::ALL
        .iter()
        .find(|c| weights.get(**c).is_sign_negative() && !weights.get(**c).is_zero())
    {
        return Err(ScoreError::Config(format!(
            "weight for {} is negative ({})",
            component.axis_label(),
            weights.get(*component)
        )));
    }

    let total = weights.total();
    if total != Decimal::ONE {
        return Err(ScoreError::Config(format!(
            "weights must sum to 1 (got {total})"
        )));
    }

    if config.normalization_cap_usd <= Decimal::ZERO {
        return Err(ScoreError::Config(format!(
            "normalization_cap_usd must be positive (got {})",
            config.normalization_cap_usd
        )));
    }

    if config.max_reporting_delay_days == 0 {
        return Err(ScoreError::Config(
            "max_reporting_delay_days must be at least 1".to_string(),
        ));
    }

    let (moderate, suspicious) = (config.moderate_threshold, config.suspicious_threshold);
    if moderate < Decimal::ZERO || suspicious > Decimal::ONE || moderate > suspicious {
        return Err(ScoreError::Config(format!(
            "thresholds must satisfy 0 <= moderate <= suspicious <= 1 (got {moderate}, {suspicious})"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;
    use itss_models::TradeInput;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn assessment(
        trade_value: Decimal,
        delay: u32,
        executive: bool,
        plan: bool,
        past_average: Decimal,
    ) -> TradeAssessment {
        TradeAssessment {
            trade_value,
            reporting_delay_days: delay,
            is_high_level_executive: executive,
            used_prearranged_plan: plan,
            past_average_trade_value: past_average,
        }
    }

    #[test]
    fn classification_boundaries_are_exact() {
        let scorer = Scorer::default();
        assert_eq!(scorer.classify(dec!(0.00)), Classification::Routine);
        assert_eq!(scorer.classify(dec!(0.39)), Classification::Routine);
        assert_eq!(scorer.classify(dec!(0.40)), Classification::Moderate);
        assert_eq!(scorer.classify(dec!(0.69)), Classification::Moderate);
        assert_eq!(scorer.classify(dec!(0.70)), Classification::Suspicious);
        assert_eq!(scorer.classify(dec!(1.00)), Classification::Suspicious);
    }

    #[test]
    fn composite_of_mixed_trade() {
        let scorer = Scorer::default();
        let breakdown = scorer.score(&assessment(dec!(500000), 0, true, false, dec!(200000)));

        assert_eq!(breakdown.components.trade_size, dec!(0.5));
        assert_eq!(breakdown.components.reporting_speed, dec!(1));
        assert_eq!(breakdown.components.exec_level, dec!(1));
        assert_eq!(breakdown.components.prearranged_plan, dec!(1));
        assert_eq!(breakdown.components.past_behavior, dec!(0.2));
        assert_eq!(breakdown.composite, dec!(0.69));
        assert_eq!(breakdown.classification, Classification::Moderate);
    }

    #[test]
    fn composite_rounds_to_two_places() {
        let scorer = Scorer::default();
        // 0.30 * 0.123456 = 0.0370368; speed 0.25 * 0.9 = 0.225; plan 0.10
        let breakdown = scorer.score(&assessment(dec!(123456), 1, false, false, Decimal::ZERO));
        assert_eq!(breakdown.composite, dec!(0.36));
        assert_eq!(breakdown.composite.scale(), 2);
        assert_eq!(breakdown.classification, Classification::Routine);
    }

    fn only_trade_size(trade_size: Decimal) -> ComponentScores {
        ComponentScores {
            trade_size,
            reporting_speed: Decimal::ZERO,
            exec_level: Decimal::ZERO,
            prearranged_plan: Decimal::ZERO,
            past_behavior: Decimal::ZERO,
        }
    }

    #[test]
    fn composite_rounds_the_binary_sum() {
        let scorer = Scorer::default();
        // 0.3 * 0.05 is stored just below 0.015
        assert_eq!(scorer.composite(&only_trade_size(dec!(0.05))), dec!(0.01));
        // 0.3 * 0.15 is stored just below 0.045
        assert_eq!(scorer.composite(&only_trade_size(dec!(0.15))), dec!(0.04));
    }

    #[test]
    fn composite_exact_binary_tie_rounds_half_to_even() {
        let scorer = Scorer::default();
        let scores = ComponentScores {
            reporting_speed: dec!(0.5),
            ..only_trade_size(Decimal::ZERO)
        };
        // 0.25 * 0.5 = 0.125 exactly
        assert_eq!(scorer.composite(&scores), dec!(0.12));
    }

    #[test]
    fn band_edge_sums_round_down() {
        let scorer = Scorer::default();

        // 0.195 + 0.25 + 0.15 + 0.10 prints as 0.695 but sits below it
        let breakdown = scorer.score(&assessment(dec!(650000), 0, true, false, Decimal::ZERO));
        assert_eq!(breakdown.composite, dec!(0.69));
        assert_eq!(breakdown.classification, Classification::Moderate);

        // 0.12 + 0.225 + 0.05 sits just below 0.395
        let breakdown = scorer.score(&assessment(dec!(400000), 1, false, true, dec!(250000)));
        assert_eq!(breakdown.composite, dec!(0.39));
        assert_eq!(breakdown.classification, Classification::Routine);
    }

    #[test]
    fn composite_always_has_two_places() {
        let scorer = Scorer::default();
        let breakdown = scorer.score(&assessment(Decimal::ZERO, 10, false, true, Decimal::ZERO));
        assert_eq!(breakdown.composite, Decimal::ZERO);
        assert_eq!(breakdown.composite.to_string(), "0.00");
    }

    #[test]
    fn custom_weights_change_composite() {
        let config = ScoringConfig {
            weights: ComponentWeights {
                trade_size: dec!(1),
                reporting_speed: dec!(0),
                exec_level: dec!(0),
                prearranged_plan: dec!(0),
                past_behavior: dec!(0),
            },
            ..ScoringConfig::default()
        };
        let scorer = Scorer::new(config).unwrap();
        let breakdown = scorer.score(&assessment(dec!(750000), 0, true, false, dec!(0)));
        assert_eq!(breakdown.composite, dec!(0.75));
        assert_eq!(breakdown.classification, Classification::Suspicious);
    }

    #[test]
    fn custom_cap_and_horizon() {
        let config = ScoringConfig {
            normalization_cap_usd: dec!(100000),
            max_reporting_delay_days: 4,
            ..ScoringConfig::default()
        };
        let scorer = Scorer::new(config).unwrap();
        let scores = scorer.components(&assessment(dec!(50000), 1, false, true, dec!(400000)));
        assert_eq!(scores.trade_size, dec!(0.5));
        assert_eq!(scores.reporting_speed, dec!(0.75));
        assert_eq!(scores.past_behavior, dec!(1));
    }

    #[test]
    fn rejects_weights_not_summing_to_one() {
        let config = ScoringConfig {
            weights: ComponentWeights {
                trade_size: dec!(0.50),
                ..ComponentWeights::default()
            },
            ..ScoringConfig::default()
        };
        let err = Scorer::new(config).unwrap_err();
        assert!(err.to_string().contains("sum to 1"));
    }

    #[test]
    fn rejects_negative_weight() {
        let config = ScoringConfig {
            weights: ComponentWeights {
                trade_size: dec!(0.50),
                reporting_speed: dec!(0.05),
                exec_level: dec!(0.15),
                prearranged_plan: dec!(-0.10),
                past_behavior: dec!(0.40),
            },
            ..ScoringConfig::default()
        };
        let err = Scorer::new(config).unwrap_err();
        assert!(matches!(err, ScoreError::Config(msg) if msg.contains("10b5-1 Plan")));
    }

    #[test]
    fn rejects_bad_cap_horizon_and_thresholds() {
        let zero_cap = ScoringConfig {
            normalization_cap_usd: Decimal::ZERO,
            ..ScoringConfig::default()
        };
        assert!(Scorer::new(zero_cap).is_err());

        let zero_horizon = ScoringConfig {
            max_reporting_delay_days: 0,
            ..ScoringConfig::default()
        };
        assert!(Scorer::new(zero_horizon).is_err());

        let inverted = ScoringConfig {
            moderate_threshold: dec!(0.80),
            suspicious_threshold: dec!(0.60),
            ..ScoringConfig::default()
        };
        assert!(Scorer::new(inverted).is_err());
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(Scorer::new(ScoringConfig::default()).unwrap(), Scorer::default());
    }

    fn trade_input_strategy() -> impl Strategy<Value = TradeInput> {
        (
            0i64..10_000_000_000i64,
            0i64..400,
            any::<bool>(),
            any::<bool>(),
            0i64..10_000_000_000i64,
        )
            .prop_map(|(cents, delay, executive, plan, past_cents)| TradeInput {
                trade_value: Decimal::new(cents, 2),
                reporting_delay_days: delay,
                is_high_level_executive: executive,
                used_prearranged_plan: plan,
                past_average_trade_value: Decimal::new(past_cents, 2),
            })
    }

    proptest! {
        /// The composite stays in [0, 1] for every valid submission.
        #[test]
        fn composite_in_unit_interval(input in trade_input_strategy()) {
            let breakdown = Scorer::default().score(&validate(&input).unwrap());
            prop_assert!(breakdown.composite >= Decimal::ZERO);
            prop_assert!(breakdown.composite <= Decimal::ONE);
        }

        /// Scoring the same trade twice gives the same breakdown.
        #[test]
        fn scoring_is_idempotent(input in trade_input_strategy()) {
            let assessment = validate(&input).unwrap();
            let scorer = Scorer::default();
            prop_assert_eq!(scorer.score(&assessment), scorer.score(&assessment));
            prop_assert_eq!(crate::score(&assessment), scorer.score(&assessment));
        }

        /// The classification always agrees with the composite's band.
        #[test]
        fn classification_matches_band(input in trade_input_strategy()) {
            let breakdown = Scorer::default().score(&validate(&input).unwrap());
            let expected = if breakdown.composite < dec!(0.40) {
                Classification::Routine
            } else if breakdown.composite < dec!(0.70) {
                Classification::Moderate
            } else {
                Classification::Suspicious
            };
            prop_assert_eq!(breakdown.classification, expected);
        }
    }
}

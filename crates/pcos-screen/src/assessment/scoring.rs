use serde::Serialize;

use super::catalog::{
    parse_age, AgeBracket, RiskFactorWeights, SymptomDefinition, KEY_FACTOR_WEIGHT_FLOOR,
    RISK_FACTOR_WEIGHTS, SYMPTOM_CATALOG,
};
use super::domain::{AssessmentInput, AssessmentOutput, RiskLevel};

pub const IRREGULAR_PERIODS_FACTOR: &str = "irregular-periods";
pub const FAMILY_HISTORY_FACTOR: &str = "family-history";
pub const AGE_FACTOR: &str = "age-factor";

pub const MAX_KEY_FACTORS: usize = 5;
pub const MAX_RISK_SCORE: u8 = 15;
pub const MIN_CONFIDENCE: u8 = 50;
pub const MAX_CONFIDENCE: u8 = 95;

const IRREGULAR_CYCLE_POINTS: f64 = 3.0;
const FAMILY_HISTORY_MULTIPLIER: f64 = 3.0;
const AGE_MULTIPLIER: f64 = 2.0;
const SYMPTOM_MULTIPLIER: f64 = 2.0;
const CONFIDENCE_PER_SYMPTOM: usize = 8;
const CONFIDENCE_SYMPTOM_CAP: usize = 90;
const COMPLETENESS_BONUS: usize = 5;

/// One additive term of the weighted score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreContribution {
    pub factor: String,
    pub points: f64,
    pub notes: String,
}

/// Unclamped score with the ordered terms that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub base_score: f64,
    pub contributions: Vec<ScoreContribution>,
    pub key_factors: Vec<String>,
}

/// Stateless scorer over the fixed symptom catalog and risk-factor weights.
#[derive(Debug, Clone, Copy)]
pub struct RiskEngine {
    symptoms: &'static [SymptomDefinition],
    weights: RiskFactorWeights,
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl RiskEngine {
    pub const fn standard() -> Self {
        Self {
            symptoms: SYMPTOM_CATALOG,
            weights: RISK_FACTOR_WEIGHTS,
        }
    }

    /// Scores a questionnaire. Total: any input yields a displayable result.
    pub fn predict(&self, input: &AssessmentInput) -> AssessmentOutput {
        let ScoreBreakdown {
            base_score,
            mut key_factors,
            ..
        } = self.breakdown(input);

        let risk_percentage = risk_percentage(base_score);
        let risk_level = RiskLevel::from_percentage(risk_percentage);
        let confidence_score = confidence_score(input);
        let risk_score = base_score.round().min(f64::from(MAX_RISK_SCORE)) as u8;
        key_factors.truncate(MAX_KEY_FACTORS);

        AssessmentOutput {
            risk_score,
            risk_percentage,
            confidence_score,
            key_factors,
            risk_level,
        }
    }

    /// Runs the weighted sum, recording every contribution in evaluation order.
    pub fn breakdown(&self, input: &AssessmentInput) -> ScoreBreakdown {
        let mut contributions = Vec::new();
        let mut key_factors: Vec<String> = Vec::new();
        let mut base_score = 0.0;

        if input.reports_irregular_cycles() {
            contributions.push(ScoreContribution {
                factor: IRREGULAR_PERIODS_FACTOR.to_string(),
                points: IRREGULAR_CYCLE_POINTS,
                notes: "cycles reported as irregular".to_string(),
            });
            base_score += IRREGULAR_CYCLE_POINTS;
            key_factors.push(IRREGULAR_PERIODS_FACTOR.to_string());
        }

        if input.reports_family_history() {
            let points = self.weights.family_history * FAMILY_HISTORY_MULTIPLIER;
            contributions.push(ScoreContribution {
                factor: FAMILY_HISTORY_FACTOR.to_string(),
                points,
                notes: "family history of PCOS".to_string(),
            });
            base_score += points;
            key_factors.push(FAMILY_HISTORY_FACTOR.to_string());
        }

        if let Some(age) = parse_age(&input.age) {
            let bracket = AgeBracket::from_age(age);
            let points = self.weights.age.weight(bracket) * AGE_MULTIPLIER;
            contributions.push(ScoreContribution {
                factor: AGE_FACTOR.to_string(),
                points,
                notes: format!("age {age} in the {} bracket", bracket.label()),
            });
            base_score += points;
            if bracket.is_peak() {
                key_factors.push(AGE_FACTOR.to_string());
            }
        }

        for symptom in self.symptoms {
            if !input.is_selected(symptom.id) {
                continue;
            }

            let points = symptom.weight * SYMPTOM_MULTIPLIER;
            contributions.push(ScoreContribution {
                factor: symptom.id.to_string(),
                points,
                notes: format!("{} (weight {:.2})", symptom.title, symptom.weight),
            });
            base_score += points;

            if symptom.weight > KEY_FACTOR_WEIGHT_FLOOR
                && key_factors.len() < MAX_KEY_FACTORS
                && !key_factors.iter().any(|factor| factor == symptom.id)
            {
                key_factors.push(symptom.id.to_string());
            }
        }

        ScoreBreakdown {
            base_score,
            contributions,
            key_factors,
        }
    }
}

/// Scores a questionnaire with the standard catalog and weights.
pub fn predict_risk(input: &AssessmentInput) -> AssessmentOutput {
    RiskEngine::standard().predict(input)
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn risk_percentage(base_score: f64) -> u8 {
    (sigmoid(base_score / 10.0) * 100.0).round().clamp(0.0, 100.0) as u8
}

fn confidence_score(input: &AssessmentInput) -> u8 {
    let mut confidence =
        (input.symptom_count() * CONFIDENCE_PER_SYMPTOM).min(CONFIDENCE_SYMPTOM_CAP);
    if !input.age.is_empty() && !input.has_regular_periods.is_empty() {
        confidence += COMPLETENESS_BONUS;
    }
    confidence.clamp(usize::from(MIN_CONFIDENCE), usize::from(MAX_CONFIDENCE)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_symptoms(input: AssessmentInput) -> AssessmentInput {
        SYMPTOM_CATALOG
            .iter()
            .fold(input, |input, symptom| input.with_symptom(symptom.id, true))
    }

    #[test]
    fn neutral_input_lands_on_the_sigmoid_midpoint() {
        let output = predict_risk(&AssessmentInput::new("", "yes", "no"));

        assert_eq!(output.risk_score, 0);
        assert_eq!(output.risk_percentage, 50);
        assert_eq!(output.risk_level, RiskLevel::Moderate);
        assert!(output.key_factors.is_empty());
        assert_eq!(output.confidence_score, MIN_CONFIDENCE);
    }

    #[test]
    fn empty_input_is_scored_not_rejected() {
        let output = predict_risk(&AssessmentInput::default());
        assert_eq!(output.risk_percentage, 50);
        assert_eq!(output.risk_level, RiskLevel::Moderate);
    }

    #[test]
    fn documented_worked_example_is_high_risk() {
        let input = AssessmentInput::new("25", "no", "yes")
            .with_symptom("irregular-periods", true)
            .with_symptom("hair-growth", true);

        let breakdown = RiskEngine::standard().breakdown(&input);
        assert!((breakdown.base_score - 9.91).abs() < 1e-9);

        let output = predict_risk(&input);
        assert_eq!(
            output.key_factors,
            vec![
                "irregular-periods",
                "family-history",
                "age-factor",
                "hair-growth"
            ]
        );
        assert_eq!(output.risk_score, 10);
        assert_eq!(output.risk_percentage, 73);
        assert_eq!(output.risk_level, RiskLevel::High);
        assert_eq!(output.confidence_score, 50);
    }

    #[test]
    fn irregular_cycle_answer_and_symptom_both_score_but_list_once() {
        let input = AssessmentInput::new("", "no", "no").with_symptom("irregular-periods", true);
        let breakdown = RiskEngine::standard().breakdown(&input);

        assert_eq!(breakdown.contributions.len(), 2);
        assert!((breakdown.base_score - 4.7).abs() < 1e-9);
        assert_eq!(breakdown.key_factors, vec!["irregular-periods"]);
    }

    #[test]
    fn unparseable_age_contributes_nothing() {
        let with_text = RiskEngine::standard().breakdown(&AssessmentInput::new("n/a", "yes", "no"));
        assert_eq!(with_text.base_score, 0.0);
        assert!(with_text.contributions.is_empty());
    }

    #[test]
    fn age_outside_peak_scores_without_key_factor() {
        let output = RiskEngine::standard().breakdown(&AssessmentInput::new("45", "yes", "no"));
        assert!((output.base_score - 0.8).abs() < 1e-9);
        assert!(output.key_factors.is_empty());
    }

    #[test]
    fn unknown_and_unselected_symptoms_are_ignored_in_score() {
        let input = AssessmentInput::new("", "yes", "no")
            .with_symptom("made-up", true)
            .with_symptom("acne", false);
        let breakdown = RiskEngine::standard().breakdown(&input);
        assert_eq!(breakdown.base_score, 0.0);
    }

    #[test]
    fn unknown_symptoms_still_raise_confidence() {
        let mut input = AssessmentInput::new("30", "yes", "no");
        for index in 0..7 {
            input = input.with_symptom(format!("custom-{index}"), true);
        }
        let output = predict_risk(&input);
        assert_eq!(output.confidence_score, 61);
    }

    #[test]
    fn secondary_symptoms_never_become_key_factors() {
        let input = AssessmentInput::new("", "yes", "no")
            .with_symptom("hair-loss", true)
            .with_symptom("fatigue", true);
        let output = predict_risk(&input);
        assert!(output.key_factors.is_empty());
        assert_eq!(output.risk_score, 2);
    }

    #[test]
    fn key_factors_keep_first_five_by_evaluation_order() {
        let input = all_symptoms(AssessmentInput::new("28", "no", "yes"));
        let output = predict_risk(&input);

        assert_eq!(
            output.key_factors,
            vec![
                "irregular-periods",
                "family-history",
                "age-factor",
                "hair-growth",
                "weight-gain"
            ]
        );
    }

    #[test]
    fn maximal_input_is_clamped() {
        let input = all_symptoms(AssessmentInput::new("25", "no", "yes"));
        let output = predict_risk(&input);

        assert_eq!(output.risk_score, MAX_RISK_SCORE);
        assert_eq!(output.confidence_score, MAX_CONFIDENCE);
        assert_eq!(output.risk_level, RiskLevel::High);
        assert!(output.risk_percentage <= 100);
    }

    #[test]
    fn input_map_order_does_not_change_the_result() {
        let forward = AssessmentInput::new("33", "no", "no")
            .with_symptom("acne", true)
            .with_symptom("weight-gain", true)
            .with_symptom("infertility", true);
        let reverse = AssessmentInput::new("33", "no", "no")
            .with_symptom("infertility", true)
            .with_symptom("weight-gain", true)
            .with_symptom("acne", true);

        let output = predict_risk(&forward);
        assert_eq!(output, predict_risk(&reverse));
        assert_eq!(
            output.key_factors,
            vec!["irregular-periods", "age-factor", "weight-gain", "infertility", "acne"]
        );
    }
}

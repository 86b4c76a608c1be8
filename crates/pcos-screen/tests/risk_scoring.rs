use pcos_screen::assessment::{
    predict_risk, AssessmentInput, AssessmentOutput, RiskEngine, RiskLevel, MAX_CONFIDENCE,
    MAX_KEY_FACTORS, MAX_RISK_SCORE, MIN_CONFIDENCE, SYMPTOM_CATALOG,
};

const AGES: [&str; 7] = ["", "17", "25", "33", "45", "61", "n/a"];

/// Every subset of the catalog, encoded as a bitmask over declaration order.
fn subsets() -> impl Iterator<Item = u32> {
    0..(1u32 << SYMPTOM_CATALOG.len())
}

fn input_for(age: &str, regular: &str, family: &str, mask: u32) -> AssessmentInput {
    SYMPTOM_CATALOG
        .iter()
        .enumerate()
        .filter(|(index, _)| mask & (1 << index) != 0)
        .fold(AssessmentInput::new(age, regular, family), |input, (_, symptom)| {
            input.with_symptom(symptom.id, true)
        })
}

fn assert_bounds(output: &AssessmentOutput) {
    assert!(output.risk_score <= MAX_RISK_SCORE);
    assert!(output.risk_percentage <= 100);
    assert!((MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&output.confidence_score));
    assert!(output.key_factors.len() <= MAX_KEY_FACTORS);
    assert_eq!(
        output.risk_level,
        RiskLevel::from_percentage(output.risk_percentage)
    );
}

#[test]
fn scenario_a_is_high_risk_with_ordered_key_factors() {
    let input = AssessmentInput::new("25", "no", "yes")
        .with_symptom("irregular-periods", true)
        .with_symptom("hair-growth", true);

    let output = predict_risk(&input);
    let breakdown = RiskEngine::standard().breakdown(&input);

    assert!((breakdown.base_score - 9.91).abs() < 1e-9);
    assert_eq!(output.risk_percentage, 73);
    assert_eq!(output.risk_level, RiskLevel::High);
    assert_eq!(output.risk_score, 10);
    assert_eq!(
        output.key_factors,
        vec!["irregular-periods", "family-history", "age-factor", "hair-growth"]
    );
}

#[test]
fn scenario_b_all_symptoms_false_is_neutral() {
    let input = SYMPTOM_CATALOG
        .iter()
        .fold(AssessmentInput::new("", "yes", "no"), |input, symptom| {
            input.with_symptom(symptom.id, false)
        });

    let output = predict_risk(&input);

    assert_eq!(output.risk_score, 0);
    assert_eq!(output.risk_percentage, 50);
    assert_eq!(output.risk_level, RiskLevel::Moderate);
    assert!(output.key_factors.is_empty());
}

#[test]
fn partial_questionnaire_json_scores_without_failing() {
    let input: AssessmentInput =
        serde_json::from_str(r#"{ "hasRegularPeriods": "no" }"#).expect("partial input parses");
    let output = predict_risk(&input);

    assert_eq!(output.key_factors, vec!["irregular-periods"]);
    assert_bounds(&output);
}

#[test]
fn output_uses_questionnaire_field_names() {
    let output = predict_risk(&AssessmentInput::default());
    let json = serde_json::to_value(&output).expect("output serializes");

    assert_eq!(json["riskPercentage"], 50);
    assert_eq!(json["riskLevel"], "Moderate");
    assert_eq!(json["confidenceScore"], 50);
    assert!(json["keyFactors"].as_array().expect("array").is_empty());
}

#[test]
fn every_answer_combination_stays_in_bounds_and_is_deterministic() {
    for age in AGES {
        for regular in ["yes", "no"] {
            for family in ["yes", "no"] {
                for mask in subsets() {
                    let input = input_for(age, regular, family, mask);
                    let output = predict_risk(&input);
                    assert_bounds(&output);
                    assert_eq!(output, predict_risk(&input.clone()));
                }
            }
        }
    }
}

#[test]
fn adding_a_symptom_never_lowers_the_score() {
    for age in ["", "28", "52"] {
        for mask in subsets() {
            let before = predict_risk(&input_for(age, "yes", "no", mask));
            for index in 0..SYMPTOM_CATALOG.len() {
                if mask & (1 << index) != 0 {
                    continue;
                }
                let after = predict_risk(&input_for(age, "yes", "no", mask | (1 << index)));
                assert!(after.risk_score >= before.risk_score, "mask {mask:#x} + {index}");
                assert!(
                    after.risk_percentage >= before.risk_percentage,
                    "mask {mask:#x} + {index}"
                );
            }
        }
    }
}

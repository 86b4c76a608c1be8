use serde::Serialize;

use super::domain::{AssessmentOutput, RiskLevel};

pub const DISCLAIMER: &str = "This assessment is not a diagnostic tool. The results are for informational purposes only and should not replace professional medical advice, diagnosis, or treatment.";

const MULTIPLE_SYMPTOM_THRESHOLD: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactorInsight {
    pub factor: String,
    pub title: &'static str,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextStep {
    pub title: &'static str,
    pub detail: &'static str,
}

/// Display-ready explanation of a scored assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub risk_level: RiskLevel,
    pub headline: &'static str,
    pub guidance: &'static str,
    pub factors: Vec<FactorInsight>,
    pub next_steps: Vec<NextStep>,
    pub disclaimer: &'static str,
}

pub fn explain(output: &AssessmentOutput, symptom_count: usize) -> ResultSummary {
    let (headline, guidance) = guidance(output.risk_level);

    let mut factors: Vec<FactorInsight> = output
        .key_factors
        .iter()
        .filter_map(|factor| {
            factor_copy(factor).map(|(title, detail)| FactorInsight {
                factor: factor.clone(),
                title,
                detail: detail.to_string(),
            })
        })
        .collect();

    if symptom_count >= MULTIPLE_SYMPTOM_THRESHOLD {
        factors.push(FactorInsight {
            factor: "multiple-symptoms".to_string(),
            title: "Multiple Symptoms",
            detail: format!(
                "You've reported {symptom_count} symptoms that may be associated with PCOS. Multiple symptoms increase the likelihood of the condition."
            ),
        });
    }

    ResultSummary {
        risk_level: output.risk_level,
        headline,
        guidance,
        factors,
        next_steps: next_steps(),
        disclaimer: DISCLAIMER,
    }
}

fn guidance(level: RiskLevel) -> (&'static str, &'static str) {
    match level {
        RiskLevel::High => (
            "High Risk Indicators",
            "Your responses suggest a higher likelihood of PCOS. It's recommended that you consult with a healthcare provider who can provide proper evaluation and diagnosis.",
        ),
        RiskLevel::Moderate => (
            "Moderate Risk Indicators",
            "Your responses indicate some symptoms consistent with PCOS. Consider discussing these symptoms with your healthcare provider at your next visit.",
        ),
        RiskLevel::Low => (
            "Low Risk Indicators",
            "Your responses suggest lower likelihood of PCOS. However, if you have specific health concerns, it's always appropriate to discuss them with your healthcare provider.",
        ),
    }
}

fn factor_copy(factor: &str) -> Option<(&'static str, &'static str)> {
    let copy = match factor {
        "irregular-periods" => (
            "Irregular Periods",
            "Irregular menstrual cycles are one of the primary indicators of PCOS.",
        ),
        "family-history" => (
            "Family History",
            "Having family members with PCOS increases your risk of developing the condition.",
        ),
        "age-factor" => (
            "Age",
            "PCOS is most commonly identified during the reproductive years, particularly in the twenties and thirties.",
        ),
        "hair-growth" => (
            "Excess Hair Growth",
            "Excess hair growth on the face or body (hirsutism) is often linked to elevated androgen levels in PCOS.",
        ),
        "weight-gain" => (
            "Unexplained Weight Gain",
            "Weight gain, particularly around the abdomen, is common in women with PCOS due to insulin resistance.",
        ),
        "infertility" => (
            "Difficulty Getting Pregnant",
            "Irregular or absent ovulation associated with PCOS is a common cause of difficulty conceiving.",
        ),
        "acne" => (
            "Acne",
            "Persistent acne can reflect the elevated androgen levels seen in PCOS.",
        ),
        _ => return None,
    };
    Some(copy)
}

fn next_steps() -> Vec<NextStep> {
    vec![
        NextStep {
            title: "Consult with a Healthcare Provider",
            detail: "Share your symptoms and this assessment with a gynecologist, endocrinologist, or primary care physician.",
        },
        NextStep {
            title: "Learn More About PCOS",
            detail: "Educate yourself about symptoms, treatment options, and lifestyle management for PCOS.",
        },
        NextStep {
            title: "Track Your Symptoms",
            detail: "Keep a record of your symptoms, their frequency, and severity to share with your healthcare provider.",
        },
    ]
}

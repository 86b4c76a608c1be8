use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Questionnaire answers as collected by the intake form.
///
/// Every field is optional on the wire so a partially completed questionnaire still
/// deserializes; missing values simply contribute nothing to the score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentInput {
    /// Free-text age; unparseable values are tolerated.
    #[serde(default)]
    pub age: String,
    /// `"yes"` or `"no"`; only `"no"` carries a penalty.
    #[serde(default)]
    pub has_regular_periods: String,
    /// `"yes"` or `"no"`; only `"yes"` carries a penalty.
    #[serde(default)]
    pub family_history: String,
    #[serde(default)]
    pub selected_symptoms: BTreeMap<String, bool>,
}

impl AssessmentInput {
    pub fn new(
        age: impl Into<String>,
        has_regular_periods: impl Into<String>,
        family_history: impl Into<String>,
    ) -> Self {
        Self {
            age: age.into(),
            has_regular_periods: has_regular_periods.into(),
            family_history: family_history.into(),
            selected_symptoms: BTreeMap::new(),
        }
    }

    /// Marks a symptom as selected (or explicitly unselected).
    pub fn with_symptom(mut self, symptom_id: impl Into<String>, selected: bool) -> Self {
        self.selected_symptoms.insert(symptom_id.into(), selected);
        self
    }

    pub fn reports_irregular_cycles(&self) -> bool {
        self.has_regular_periods == "no"
    }

    pub fn reports_family_history(&self) -> bool {
        self.family_history == "yes"
    }

    /// Number of `true` symptom answers, whether or not the catalog knows the symptom.
    pub fn symptom_count(&self) -> usize {
        self.selected_symptoms
            .values()
            .filter(|selected| **selected)
            .count()
    }

    pub fn is_selected(&self, symptom_id: &str) -> bool {
        self.selected_symptoms.get(symptom_id).copied().unwrap_or(false)
    }
}

/// Result of a single scoring pass. Becomes the stored record once persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentOutput {
    /// Rounded weighted score, clamped to `0..=15`.
    pub risk_score: u8,
    /// Sigmoid-normalized score, `0..=100`.
    pub risk_percentage: u8,
    /// Completeness-based confidence, `50..=95`.
    pub confidence_score: u8,
    /// Up to five contributing factor ids in evaluation order.
    pub key_factors: Vec<String>,
    pub risk_level: RiskLevel,
}

/// Discrete risk band derived from the risk percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub const HIGH_THRESHOLD: u8 = 70;
    pub const MODERATE_THRESHOLD: u8 = 40;

    pub const fn from_percentage(percentage: u8) -> Self {
        if percentage >= Self::HIGH_THRESHOLD {
            RiskLevel::High
        } else if percentage >= Self::MODERATE_THRESHOLD {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }

    /// Exact, case-sensitive match on the display label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Low" => Some(RiskLevel::Low),
            "Moderate" => Some(RiskLevel::Moderate),
            "High" => Some(RiskLevel::High),
            _ => None,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_thresholds_are_inclusive() {
        assert_eq!(RiskLevel::from_percentage(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_percentage(39), RiskLevel::Low);
        assert_eq!(RiskLevel::from_percentage(40), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_percentage(69), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_percentage(70), RiskLevel::High);
        assert_eq!(RiskLevel::from_percentage(100), RiskLevel::High);
    }

    #[test]
    fn partial_questionnaire_deserializes_with_defaults() {
        let input: AssessmentInput =
            serde_json::from_str(r#"{"hasRegularPeriods":"no"}"#).expect("partial input");
        assert!(input.age.is_empty());
        assert!(input.reports_irregular_cycles());
        assert!(input.selected_symptoms.is_empty());
    }

    #[test]
    fn symptom_count_ignores_unselected_answers() {
        let input = AssessmentInput::default()
            .with_symptom("acne", true)
            .with_symptom("fatigue", false)
            .with_symptom("not-in-catalog", true);
        assert_eq!(input.symptom_count(), 2);
        assert!(input.is_selected("acne"));
        assert!(!input.is_selected("fatigue"));
    }

    #[test]
    fn output_uses_camel_case_on_the_wire() {
        let output = AssessmentOutput {
            risk_score: 4,
            risk_percentage: 61,
            confidence_score: 50,
            key_factors: vec!["acne".to_string()],
            risk_level: RiskLevel::Moderate,
        };
        let json = serde_json::to_value(&output).expect("serializes");
        assert_eq!(json["riskPercentage"], 61);
        assert_eq!(json["riskLevel"], "Moderate");
        assert_eq!(json["keyFactors"][0], "acne");
    }
}

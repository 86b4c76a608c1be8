use serde::Serialize;

/// Weight tier of a symptom. Only primary symptoms can become key factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomTier {
    Primary,
    Secondary,
    Associated,
}

/// Questionnaire step a symptom is asked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionnaireStep {
    Common,
    Additional,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub weight: f64,
    pub tier: SymptomTier,
    pub step: QuestionnaireStep,
}

/// Symptoms above this weight are eligible to be reported as key factors.
pub const KEY_FACTOR_WEIGHT_FLOOR: f64 = 0.6;

/// Fixed symptom table. Declaration order is the scoring order.
pub const SYMPTOM_CATALOG: &[SymptomDefinition] = &[
    SymptomDefinition {
        id: "irregular-periods",
        title: "Irregular Periods",
        description: "Infrequent, absent, or unpredictable menstrual cycles",
        weight: 0.85,
        tier: SymptomTier::Primary,
        step: QuestionnaireStep::Common,
    },
    SymptomDefinition {
        id: "hair-growth",
        title: "Excess Hair Growth",
        description: "On face, chest, back, or other unusual places",
        weight: 0.78,
        tier: SymptomTier::Primary,
        step: QuestionnaireStep::Common,
    },
    SymptomDefinition {
        id: "weight-gain",
        title: "Unexplained Weight Gain",
        description: "Especially around the waist area",
        weight: 0.72,
        tier: SymptomTier::Primary,
        step: QuestionnaireStep::Common,
    },
    SymptomDefinition {
        id: "infertility",
        title: "Difficulty Getting Pregnant",
        description: "Trouble conceiving when trying to get pregnant",
        weight: 0.75,
        tier: SymptomTier::Primary,
        step: QuestionnaireStep::Additional,
    },
    SymptomDefinition {
        id: "acne",
        title: "Acne",
        description: "Persistent acne that doesn't respond well to treatment",
        weight: 0.65,
        tier: SymptomTier::Primary,
        step: QuestionnaireStep::Common,
    },
    SymptomDefinition {
        id: "hair-loss",
        title: "Hair Loss or Thinning",
        description: "Male-pattern baldness or thinning hair on scalp",
        weight: 0.58,
        tier: SymptomTier::Secondary,
        step: QuestionnaireStep::Common,
    },
    SymptomDefinition {
        id: "skin-tags",
        title: "Skin Tags",
        description: "Small excess flaps of skin in the armpits or neck area",
        weight: 0.45,
        tier: SymptomTier::Secondary,
        step: QuestionnaireStep::Common,
    },
    SymptomDefinition {
        id: "pelvic-pain",
        title: "Pelvic Pain",
        description: "During periods or at other times",
        weight: 0.52,
        tier: SymptomTier::Secondary,
        step: QuestionnaireStep::Additional,
    },
    SymptomDefinition {
        id: "fatigue",
        title: "Fatigue",
        description: "Constant or overwhelming tiredness",
        weight: 0.38,
        tier: SymptomTier::Associated,
        step: QuestionnaireStep::Additional,
    },
    SymptomDefinition {
        id: "mood-changes",
        title: "Mood Changes",
        description: "Including depression or mood swings",
        weight: 0.35,
        tier: SymptomTier::Associated,
        step: QuestionnaireStep::Additional,
    },
    SymptomDefinition {
        id: "headaches",
        title: "Headaches",
        description: "Related to hormonal changes",
        weight: 0.32,
        tier: SymptomTier::Associated,
        step: QuestionnaireStep::Additional,
    },
    SymptomDefinition {
        id: "sleep-problems",
        title: "Sleep Problems",
        description: "Insomnia or poor sleep quality",
        weight: 0.30,
        tier: SymptomTier::Associated,
        step: QuestionnaireStep::Additional,
    },
];

pub fn lookup(symptom_id: &str) -> Option<&'static SymptomDefinition> {
    SYMPTOM_CATALOG
        .iter()
        .find(|symptom| symptom.id == symptom_id)
}

pub fn weight(symptom_id: &str) -> Option<f64> {
    lookup(symptom_id).map(|symptom| symptom.weight)
}

pub fn for_step(step: QuestionnaireStep) -> Vec<&'static SymptomDefinition> {
    SYMPTOM_CATALOG
        .iter()
        .filter(|symptom| symptom.step == step)
        .collect()
}

/// Age bands used by the age contribution. Risk peaks in the twenties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBracket {
    Teen,
    Twenties,
    Thirties,
    Forties,
    FiftyPlus,
}

impl AgeBracket {
    pub const fn from_age(age: i64) -> Self {
        if age < 20 {
            AgeBracket::Teen
        } else if age < 30 {
            AgeBracket::Twenties
        } else if age < 40 {
            AgeBracket::Thirties
        } else if age < 50 {
            AgeBracket::Forties
        } else {
            AgeBracket::FiftyPlus
        }
    }

    /// Brackets that are surfaced as the `age-factor` key factor.
    pub const fn is_peak(self) -> bool {
        matches!(self, AgeBracket::Twenties | AgeBracket::Thirties)
    }

    pub const fn label(self) -> &'static str {
        match self {
            AgeBracket::Teen => "under 20",
            AgeBracket::Twenties => "20-29",
            AgeBracket::Thirties => "30-39",
            AgeBracket::Forties => "40-49",
            AgeBracket::FiftyPlus => "50+",
        }
    }
}

/// Per-bracket age weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgeWeights {
    pub teen: f64,
    pub twenties: f64,
    pub thirties: f64,
    pub forties: f64,
    pub fifty_plus: f64,
}

impl AgeWeights {
    pub const fn weight(&self, bracket: AgeBracket) -> f64 {
        match bracket {
            AgeBracket::Teen => self.teen,
            AgeBracket::Twenties => self.twenties,
            AgeBracket::Thirties => self.thirties,
            AgeBracket::Forties => self.forties,
            AgeBracket::FiftyPlus => self.fifty_plus,
        }
    }
}

/// Weights for the non-symptom risk factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskFactorWeights {
    pub family_history: f64,
    pub age: AgeWeights,
}

pub const RISK_FACTOR_WEIGHTS: RiskFactorWeights = RiskFactorWeights {
    family_history: 0.65,
    age: AgeWeights {
        teen: 0.45,
        twenties: 0.85,
        thirties: 0.62,
        forties: 0.40,
        fifty_plus: 0.20,
    },
};

/// Lenient integer parse of a free-text age.
///
/// Leading whitespace and a sign are accepted and parsing stops at the first non-digit, so
/// `"25 years"` reads as 25 and `"31.9"` as 31. Returns `None` when no digit leads the text.
pub fn parse_age(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: Option<i64> = None;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        let digit = i64::from(byte - b'0');
        value = Some(
            value
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit),
        );
    }

    value.map(|age| if negative { -age } else { age })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        for (index, symptom) in SYMPTOM_CATALOG.iter().enumerate() {
            assert!(
                SYMPTOM_CATALOG[index + 1..]
                    .iter()
                    .all(|other| other.id != symptom.id),
                "duplicate symptom id {}",
                symptom.id
            );
        }
    }

    #[test]
    fn tiers_follow_weight_bands() {
        for symptom in SYMPTOM_CATALOG {
            let expected = if symptom.weight >= KEY_FACTOR_WEIGHT_FLOOR {
                SymptomTier::Primary
            } else if symptom.weight >= 0.45 {
                SymptomTier::Secondary
            } else {
                SymptomTier::Associated
            };
            assert_eq!(symptom.tier, expected, "{}", symptom.id);
            assert!((0.30..=0.85).contains(&symptom.weight));
        }
    }

    #[test]
    fn steps_split_the_catalog_in_half() {
        assert_eq!(for_step(QuestionnaireStep::Common).len(), 6);
        assert_eq!(for_step(QuestionnaireStep::Additional).len(), 6);
    }

    #[test]
    fn lookup_finds_known_symptoms_only() {
        assert_eq!(weight("hair-growth"), Some(0.78));
        assert!(lookup("family-history").is_none());
    }

    #[test]
    fn age_brackets_match_boundaries() {
        assert_eq!(AgeBracket::from_age(19), AgeBracket::Teen);
        assert_eq!(AgeBracket::from_age(20), AgeBracket::Twenties);
        assert_eq!(AgeBracket::from_age(39), AgeBracket::Thirties);
        assert_eq!(AgeBracket::from_age(40), AgeBracket::Forties);
        assert_eq!(AgeBracket::from_age(50), AgeBracket::FiftyPlus);
        assert_eq!(AgeBracket::from_age(-4), AgeBracket::Teen);
        assert!(AgeBracket::Thirties.is_peak());
        assert!(!AgeBracket::Forties.is_peak());
    }

    #[test]
    fn age_weights_peak_in_twenties() {
        let weights = RISK_FACTOR_WEIGHTS.age;
        assert_eq!(weights.weight(AgeBracket::Twenties), 0.85);
        assert_eq!(weights.weight(AgeBracket::FiftyPlus), 0.20);
    }

    #[test]
    fn parse_age_is_lenient_about_trailing_text() {
        assert_eq!(parse_age("25"), Some(25));
        assert_eq!(parse_age("  42"), Some(42));
        assert_eq!(parse_age("31.9"), Some(31));
        assert_eq!(parse_age("19 years"), Some(19));
        assert_eq!(parse_age("-3"), Some(-3));
        assert_eq!(parse_age(""), None);
        assert_eq!(parse_age("twenty"), None);
        assert_eq!(parse_age("-"), None);
    }
}

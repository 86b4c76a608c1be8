//! Diet and exercise plans derived from an assessment.
//!
//! Each plan starts from a fixed baseline template and is extended, append-only, by the risk
//! level, the recognised key factors, and the age band. Title replacement for the risk level
//! always happens before any factor or age additions.

mod diet;
mod exercise;

pub use diet::{diet_plan, DietRecommendation, FoodGroup, MealSuggestion};
pub use exercise::{exercise_plan, Exercise, ExerciseRecommendation, ExerciseRoutine};

use serde::Serialize;

use crate::assessment::{parse_age, AssessmentOutput, RiskLevel};

/// Both plans for one assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationBundle {
    pub diet: DietRecommendation,
    pub exercise: ExerciseRecommendation,
}

pub fn recommend<S: AsRef<str>>(
    risk_level: RiskLevel,
    key_factors: &[S],
    age: &str,
) -> RecommendationBundle {
    RecommendationBundle {
        diet: diet_plan(risk_level, key_factors, age),
        exercise: exercise_plan(risk_level, key_factors, age),
    }
}

/// Plans for a scored assessment, using the age answer it was scored with.
pub fn for_assessment(output: &AssessmentOutput, age: &str) -> RecommendationBundle {
    recommend(output.risk_level, output.key_factors.as_slice(), age)
}

/// Key factors with dedicated plan additions, in the order they are applied.
pub const TAILORED_FACTORS: [&str; 4] = ["weight-gain", "irregular-periods", "acne", "mood-changes"];

const YOUTH_AGE_LIMIT: i64 = 25;
const MATURE_AGE_FLOOR: i64 = 35;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AgeBand {
    Youth,
    Mature,
    Unbanded,
}

impl AgeBand {
    fn from_answer(age: &str) -> Self {
        match parse_age(age) {
            Some(age) if age < YOUTH_AGE_LIMIT => AgeBand::Youth,
            Some(age) if age > MATURE_AGE_FLOOR => AgeBand::Mature,
            _ => AgeBand::Unbanded,
        }
    }
}

fn has_factor<S: AsRef<str>>(key_factors: &[S], factor: &str) -> bool {
    key_factors.iter().any(|candidate| candidate.as_ref() == factor)
}

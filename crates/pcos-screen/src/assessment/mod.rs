//! Questionnaire scoring: symptom catalog, weighted risk heuristic, and result insights.
//!
//! Scoring is a deterministic weighted sum squashed through a sigmoid. It is not a trained
//! model and never fails; malformed answers contribute nothing.

pub mod catalog;
pub mod domain;
pub mod insights;
mod scoring;

pub use catalog::{
    parse_age, AgeBracket, QuestionnaireStep, RiskFactorWeights, SymptomDefinition, SymptomTier,
    RISK_FACTOR_WEIGHTS, SYMPTOM_CATALOG,
};
pub use domain::{AssessmentInput, AssessmentOutput, RiskLevel};
pub use insights::{explain, ResultSummary};
pub use scoring::{
    predict_risk, RiskEngine, ScoreBreakdown, ScoreContribution, AGE_FACTOR,
    FAMILY_HISTORY_FACTOR, IRREGULAR_PERIODS_FACTOR, MAX_CONFIDENCE, MAX_KEY_FACTORS,
    MAX_RISK_SCORE, MIN_CONFIDENCE,
};

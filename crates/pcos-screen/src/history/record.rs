use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::assessment::{AssessmentInput, AssessmentOutput};

/// Identifier wrapper for stored assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub String);

/// Identifier of the account an assessment belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Immutable snapshot of one questionnaire submission and its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub id: RecordId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub answers: AssessmentInput,
    pub result: AssessmentOutput,
    pub symptom_count: usize,
}

impl AssessmentRecord {
    pub fn trend_point(&self) -> TrendPoint {
        TrendPoint {
            date: self.created_at.date_naive(),
            risk_percentage: self.result.risk_percentage,
        }
    }
}

/// One point of the risk-over-time chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub risk_percentage: u8,
}

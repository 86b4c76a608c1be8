use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::record::{AssessmentRecord, RecordId, TrendPoint, UserId};
use super::repository::{AssessmentRepository, RepositoryError};
use crate::assessment::{AssessmentInput, AssessmentOutput, RiskEngine};
use crate::config::HistoryConfig;
use crate::recommendations::{self, RecommendationBundle};

/// Service composing the risk engine with assessment storage.
pub struct AssessmentService<R> {
    repository: Arc<R>,
    engine: RiskEngine,
    config: HistoryConfig,
}

static RECORD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_record_id() -> RecordId {
    let id = RECORD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    RecordId(format!("asmt-{id:06}"))
}

impl<R> AssessmentService<R>
where
    R: AssessmentRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: HistoryConfig) -> Self {
        Self {
            repository,
            engine: RiskEngine::standard(),
            config,
        }
    }

    /// Score without persisting, for anonymous visitors.
    pub fn score(&self, input: &AssessmentInput) -> AssessmentOutput {
        let output = self.engine.predict(input);
        debug!(
            risk_level = %output.risk_level,
            risk_percentage = output.risk_percentage,
            "anonymous assessment scored"
        );
        output
    }

    /// Score and store a submission for `user_id`.
    pub fn submit(
        &self,
        user_id: UserId,
        input: AssessmentInput,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        self.submit_at(user_id, input, Utc::now())
    }

    /// Same as [`submit`](Self::submit) with an explicit creation time.
    pub fn submit_at(
        &self,
        user_id: UserId,
        input: AssessmentInput,
        created_at: DateTime<Utc>,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let result = self.engine.predict(&input);
        let record = AssessmentRecord {
            id: next_record_id(),
            user_id,
            created_at,
            symptom_count: input.symptom_count(),
            answers: input,
            result,
        };

        let stored = self.repository.insert(record)?;
        info!(
            record_id = %stored.id.0,
            user_id = %stored.user_id.0,
            risk_level = %stored.result.risk_level,
            risk_percentage = stored.result.risk_percentage,
            "assessment stored"
        );
        Ok(stored)
    }

    pub fn get(&self, record_id: &RecordId) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(record_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Most recent records for a user, newest first, bounded by the configured limit.
    pub fn history(&self, user_id: &UserId) -> Result<Vec<AssessmentRecord>, AssessmentServiceError> {
        Ok(self.repository.list_for_user(user_id, self.config.limit)?)
    }

    pub fn latest(&self, user_id: &UserId) -> Result<Option<AssessmentRecord>, AssessmentServiceError> {
        let mut records = self.repository.list_for_user(user_id, 1)?;
        Ok(records.pop())
    }

    /// Chart data for the user's recent history, oldest first.
    pub fn trend(&self, user_id: &UserId) -> Result<Vec<TrendPoint>, AssessmentServiceError> {
        let records = self.history(user_id)?;
        Ok(records.iter().rev().map(AssessmentRecord::trend_point).collect())
    }

    /// Diet and exercise plans for a stored record.
    pub fn recommendations(
        &self,
        record_id: &RecordId,
    ) -> Result<RecommendationBundle, AssessmentServiceError> {
        let record = self.get(record_id)?;
        Ok(recommendations::for_assessment(
            &record.result,
            &record.answers.age,
        ))
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

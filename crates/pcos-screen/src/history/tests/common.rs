use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::assessment::AssessmentInput;
use crate::config::HistoryConfig;
use crate::history::record::{AssessmentRecord, RecordId, UserId};
use crate::history::repository::{AssessmentRepository, RepositoryError};
use crate::history::{assessment_router, AssessmentService};

#[derive(Default)]
pub(super) struct MemoryRepository {
    pub(super) records: Mutex<Vec<AssessmentRecord>>,
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &RecordId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|record| &record.id == id).cloned())
    }

    fn list_for_user(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .rev()
            .filter(|record| &record.user_id == user_id)
            .take(limit)
            .cloned()
            .collect())
    }
}

pub(super) struct ConflictRepository;

impl AssessmentRepository for ConflictRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &RecordId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Ok(None)
    }

    fn list_for_user(
        &self,
        _user_id: &UserId,
        _limit: usize,
    ) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &RecordId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list_for_user(
        &self,
        _user_id: &UserId,
        _limit: usize,
    ) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn high_risk_answers() -> AssessmentInput {
    AssessmentInput::new("25", "no", "yes")
        .with_symptom("irregular-periods", true)
        .with_symptom("hair-growth", true)
}

pub(super) fn low_signal_answers() -> AssessmentInput {
    AssessmentInput::new("52", "yes", "no").with_symptom("headaches", true)
}

pub(super) fn day(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn build_service(
    limit: usize,
) -> (AssessmentService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(repository.clone(), HistoryConfig { limit });
    (service, repository)
}

pub(super) fn router_with_service<R>(service: AssessmentService<R>) -> axum::Router
where
    R: AssessmentRepository + 'static,
{
    assessment_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn user(name: &str) -> UserId {
    UserId(name.to_string())
}

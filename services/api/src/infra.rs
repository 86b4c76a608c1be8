use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use pcos_screen::assessment::catalog;
use pcos_screen::history::{
    AssessmentRecord, AssessmentRepository, RecordId, RepositoryError, UserId,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentRepository {
    records: Arc<Mutex<HashMap<RecordId, AssessmentRecord>>>,
}

impl AssessmentRepository for InMemoryAssessmentRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &RecordId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list_for_user(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<AssessmentRecord> = guard
            .values()
            .filter(|record| &record.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.0.cmp(&a.id.0))
        });
        records.truncate(limit);
        Ok(records)
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Accepts `yes`/`no` answers in any case and returns the canonical lowercase form.
pub(crate) fn parse_answer(raw: &str) -> Result<String, String> {
    let normalized = raw.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "yes" | "no" => Ok(normalized),
        _ => Err(format!("expected 'yes' or 'no', got '{raw}'")),
    }
}

pub(crate) fn parse_symptom(raw: &str) -> Result<String, String> {
    let id = raw.trim();
    catalog::lookup(id)
        .map(|definition| definition.id.to_string())
        .ok_or_else(|| {
            let known: Vec<&str> = catalog::SYMPTOM_CATALOG.iter().map(|s| s.id).collect();
            format!("unknown symptom '{raw}' (expected one of: {})", known.join(", "))
        })
}

use super::record::{AssessmentRecord, RecordId, UserId};

/// Storage abstraction for assessment records so the service can be exercised in isolation.
///
/// Records are write-once: there is no update operation.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn fetch(&self, id: &RecordId) -> Result<Option<AssessmentRecord>, RepositoryError>;
    /// Newest first, at most `limit` records.
    fn list_for_user(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<AssessmentRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

//! Assessment history: immutable records of scored questionnaires per user.

pub mod record;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use record::{AssessmentRecord, RecordId, TrendPoint, UserId};
pub use repository::{AssessmentRepository, RepositoryError};
pub use router::{assessment_router, AssessmentResponse, SubmitAssessmentRequest};
pub use service::{AssessmentService, AssessmentServiceError};

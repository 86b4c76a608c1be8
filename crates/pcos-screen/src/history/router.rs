use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::record::{RecordId, UserId};
use super::repository::{AssessmentRepository, RepositoryError};
use super::service::{AssessmentService, AssessmentServiceError};
use crate::assessment::{explain, AssessmentInput, AssessmentOutput, ResultSummary};

/// Questionnaire submission. Without a user id the answers are scored but not stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAssessmentRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub answers: AssessmentInput,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<RecordId>,
    pub result: AssessmentOutput,
    pub summary: ResultSummary,
}

/// Router builder exposing HTTP endpoints for scoring and assessment history.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: AssessmentRepository + 'static,
{
    Router::new()
        .route("/api/v1/assessments", post(submit_handler::<R>))
        .route("/api/v1/assessments/:record_id", get(record_handler::<R>))
        .route(
            "/api/v1/assessments/:record_id/recommendations",
            get(recommendations_handler::<R>),
        )
        .route(
            "/api/v1/users/:user_id/assessments",
            get(history_handler::<R>),
        )
        .route(
            "/api/v1/users/:user_id/assessments/latest",
            get(latest_handler::<R>),
        )
        .route("/api/v1/users/:user_id/trend", get(trend_handler::<R>))
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(request): axum::Json<SubmitAssessmentRequest>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let SubmitAssessmentRequest { user_id, answers } = request;
    let symptom_count = answers.symptom_count();

    let user_id = user_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty());
    let Some(user_id) = user_id else {
        let result = service.score(&answers);
        let summary = explain(&result, symptom_count);
        let body = AssessmentResponse {
            record_id: None,
            result,
            summary,
        };
        return (StatusCode::OK, axum::Json(body)).into_response();
    };

    match service.submit(UserId(user_id), answers) {
        Ok(record) => {
            let summary = explain(&record.result, record.symptom_count);
            let body = AssessmentResponse {
                record_id: Some(record.id),
                result: record.result,
                summary,
            };
            (StatusCode::CREATED, axum::Json(body)).into_response()
        }
        Err(AssessmentServiceError::Repository(RepositoryError::Conflict)) => {
            error_response(StatusCode::CONFLICT, "assessment already exists")
        }
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

pub(crate) async fn record_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(record_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.get(&RecordId(record_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn recommendations_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(record_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.recommendations(&RecordId(record_id)) {
        Ok(bundle) => (StatusCode::OK, axum::Json(bundle)).into_response(),
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn history_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.history(&UserId(user_id)) {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn latest_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.latest(&UserId(user_id.clone())) {
        Ok(Some(record)) => (StatusCode::OK, axum::Json(record)).into_response(),
        Ok(None) => {
            let payload = json!({
                "error": "no assessments recorded",
                "userId": user_id,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn trend_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.trend(&UserId(user_id)) {
        Ok(points) => (StatusCode::OK, axum::Json(points)).into_response(),
        Err(err) => service_error_response(err),
    }
}

fn service_error_response(err: AssessmentServiceError) -> Response {
    match err {
        AssessmentServiceError::Repository(RepositoryError::NotFound) => {
            error_response(StatusCode::NOT_FOUND, "assessment not found")
        }
        other => error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let payload = json!({
        "error": message.into(),
    });
    (status, axum::Json(payload)).into_response()
}

use crate::infra::AppState;
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Extension;
use axum::Json;
use pcos_screen::appointments::{appointment_router, AppointmentBook};
use pcos_screen::assessment::{RiskLevel, SymptomDefinition, SYMPTOM_CATALOG};
use pcos_screen::history::{assessment_router, AssessmentRepository, AssessmentService};
use pcos_screen::qa::{self, Expert, QaEntry, QaQuery};
use pcos_screen::recommendations::{recommend, RecommendationBundle};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecommendationRequest {
    #[serde(default)]
    pub(crate) risk_level: String,
    #[serde(default)]
    pub(crate) key_factors: Vec<String>,
    #[serde(default)]
    pub(crate) age: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QaResponse {
    pub(crate) total: usize,
    pub(crate) entries: Vec<&'static QaEntry>,
}

pub(crate) fn with_api_routes<R>(
    service: Arc<AssessmentService<R>>,
    book: Arc<AppointmentBook>,
) -> axum::Router
where
    R: AssessmentRepository + 'static,
{
    assessment_router(service)
        .merge(appointment_router(book))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/symptoms", get(symptoms_endpoint))
        .route("/api/v1/recommendations", post(recommendations_endpoint))
        .route("/api/v1/qa", get(qa_endpoint))
        .route("/api/v1/qa/experts", get(experts_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn symptoms_endpoint() -> Json<&'static [SymptomDefinition]> {
    Json(SYMPTOM_CATALOG)
}

/// Unrecognised risk levels fall back to the baseline plans.
pub(crate) async fn recommendations_endpoint(
    Json(payload): Json<RecommendationRequest>,
) -> Json<RecommendationBundle> {
    let RecommendationRequest {
        risk_level,
        key_factors,
        age,
    } = payload;

    let risk_level = RiskLevel::from_label(&risk_level).unwrap_or(RiskLevel::Low);
    Json(recommend(risk_level, key_factors.as_slice(), &age))
}

pub(crate) async fn qa_endpoint(Query(query): Query<QaQuery>) -> Json<QaResponse> {
    let entries = qa::search(&query);
    Json(QaResponse {
        total: entries.len(),
        entries,
    })
}

pub(crate) async fn experts_endpoint() -> Json<&'static [Expert]> {
    Json(qa::EXPERTS.as_slice())
}

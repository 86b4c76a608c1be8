use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::{AppointmentBook, AppointmentRequest, SPECIALIZATIONS, TIME_SLOTS};

pub fn appointment_router(book: Arc<AppointmentBook>) -> Router {
    Router::new()
        .route(
            "/api/v1/appointments",
            post(book_handler).get(list_handler),
        )
        .route("/api/v1/appointments/options", get(options_handler))
        .with_state(book)
}

async fn book_handler(
    State(book): State<Arc<AppointmentBook>>,
    axum::Json(request): axum::Json<AppointmentRequest>,
) -> Response {
    match book.book(request) {
        Ok(confirmation) => (StatusCode::CREATED, axum::Json(confirmation)).into_response(),
        Err(err) => {
            let payload = json!({
                "error": err.to_string(),
                "field": err.field(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

async fn list_handler(State(book): State<Arc<AppointmentBook>>) -> Response {
    (StatusCode::OK, axum::Json(book.list())).into_response()
}

/// Values the booking form offers for specialization and time.
async fn options_handler() -> Response {
    let payload = json!({
        "specializations": SPECIALIZATIONS,
        "timeSlots": TIME_SLOTS,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

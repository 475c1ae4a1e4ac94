//! Waitlist signup route.

use axum::{
    Json, Router, body::Bytes, extract::State, http::StatusCode, response::IntoResponse,
    routing::post,
};
use serde::Serialize;
use serde_json::Value;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::WaitlistEntry,
};

const SUCCESS_MESSAGE: &str =
    "Successfully joined the waitlist! Check your email for confirmation.";

#[derive(Serialize)]
struct SubscribeResponse {
    message: &'static str,
    data: Vec<WaitlistEntry>,
}

/// POST /api/subscribe
/// Body: `{"email": string}`. The body is read raw so that a missing or
/// non-string `email` is a 400 while an unparseable body is a 500.
async fn subscribe(State(app_state): State<AppState>, body: Bytes) -> AppResult<impl IntoResponse> {
    let payload: Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::Internal(format!("Malformed request body: {e}")))?;

    // A bare `null` has no fields to read, so it fails like an unparseable body.
    if payload.is_null() {
        return Err(AppError::Internal("Request body is null".into()));
    }

    let email = payload
        .get("email")
        .and_then(Value::as_str)
        .filter(|email| !email.is_empty())
        .ok_or_else(|| AppError::InvalidInput("Email is required".into()))?;

    let entry = app_state.waitlist_use_cases.join(email).await?;

    Ok((
        StatusCode::OK,
        Json(SubscribeResponse {
            message: SUCCESS_MESSAGE,
            data: vec![entry],
        }),
    ))
}

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/subscribe", post(subscribe))
}

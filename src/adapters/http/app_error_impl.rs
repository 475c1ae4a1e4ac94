use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        if self.is_client_error() {
            tracing::debug!(error = %self, "Request rejected");
        } else {
            tracing::error!(error = ?self, "Request failed");
        }

        let status = match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::AlreadyOnWaitlist => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Email(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        error_resp(status, self.public_message())
    }
}

fn error_resp(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

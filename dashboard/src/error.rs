use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use polygraph::PolygraphError;
use serde_json::json;

/// Unified error type that renders as a JSON `{"error": "..."}` response
/// with an appropriate HTTP status code.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn bad_gateway(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<PolygraphError> for AppError {
    fn from(e: PolygraphError) -> Self {
        tracing::warn!(error = %e, "refresh cycle failed");
        match &e {
            PolygraphError::NotFound(msg) => AppError::not_found(msg.clone()),
            PolygraphError::InvalidArgument(msg) => AppError::bad_request(msg.clone()),
            PolygraphError::Internal(msg) => AppError::internal(msg.clone()),
            PolygraphError::Http(_)
            | PolygraphError::GraphQl(_)
            | PolygraphError::Json(_)
            | PolygraphError::MissingColumn(_) => AppError::bad_gateway(e.to_string()),
        }
    }
}

use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use innkeep_core::CoreError;
use serde_json::json;
use thiserror::Error;

/// Error surface of the HTTP layer. Converts into the wire response directly;
/// handlers propagate with `?`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Room not found")]
    RoomNotFound,

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::RoomNotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        if err.is_not_found() {
            Self::RoomNotFound
        } else {
            Self::Internal(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = json!({ "message": self.to_string() });
        if status.is_server_error() {
            tracing::error!(status = %status.as_u16(), "request failed");
        }
        (status, Json(body)).into_response()
    }
}

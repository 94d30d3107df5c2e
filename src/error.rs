//! JSON API errors.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::media::MediaError;

/// Errors returned by `/api/v1` handlers as `{"error": {"message", "code"}}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("{0} is not configured")]
    Unavailable(&'static str),

    #[error(transparent)]
    Media(#[from] MediaError),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Media(MediaError::Upstream { status: 404 }) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Media(MediaError::HttpClientBuild(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Media(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Client-facing text. Upstream details stay in the logs.
    fn public_message(&self) -> String {
        match self {
            Self::Media(MediaError::Upstream { status: 404 }) => "Resource not found".to_owned(),
            Self::BadRequest(message) => message.clone(),
            Self::Unavailable(_) => self.to_string(),
            Self::Media(MediaError::HttpClientBuild(_)) => "Internal server error".to_owned(),
            Self::Media(_) => "External service error".to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "api request failed");
        }
        let body = Json(serde_json::json!({
            "error": {
                "message": self.public_message(),
                "code": status.as_u16(),
            }
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use wordpress_client::WordPressError;

/// The only errors that cross the HTTP boundary. Media resolution trouble
/// never becomes one of these; it degrades to an absent field instead.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    #[error("Failed to obtain JWT token from WordPress: {0}")]
    TokenAcquisitionFailed(WordPressError),

    #[error("Failed to fetch posts from WordPress: {0}")]
    UpstreamFetchFailed(WordPressError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            ApiError::TokenAcquisitionFailed(_) | ApiError::UpstreamFetchFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        match &self {
            ApiError::InvalidToken(detail) => {
                tracing::warn!(%detail, "Rejected bearer token");
            }
            ApiError::TokenAcquisitionFailed(cause) => {
                tracing::error!(error = %cause, "Token acquisition failed");
            }
            ApiError::UpstreamFetchFailed(cause) => {
                tracing::error!(error = %cause, "Upstream posts fetch failed");
            }
        }

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API error kinds, each a fixed HTTP status and fixed message
///
/// Every failed request terminates with one of these five envelopes:
/// `{"success": false, "error": <code>, "message": <string>}`. The message
/// strings are part of the API contract and never carry underlying detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 400: malformed request body or query input
    #[error("bad request")]
    BadRequest,

    /// 404: missing id, empty page, or no search matches
    #[error("page not found")]
    NotFound,

    /// 405: routing mismatch
    #[error("method not allowed")]
    MethodNotAllowed,

    /// 422: a mutating operation failed in the store
    #[error("unprocessable entity")]
    Unprocessable,

    /// 500: uncaught failure on a read-only path
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Maps a malformed body or query to 400, logging the rejection
    /// detail that the envelope discards.
    pub fn bad_request(err: impl std::fmt::Display) -> Self {
        tracing::warn!(cause = %err, "malformed request input");
        ApiError::BadRequest
    }

    /// Maps a store failure on a mutating path to 422, logging the cause
    /// that the envelope discards.
    pub fn unprocessable(err: impl std::fmt::Display) -> Self {
        tracing::warn!(cause = %err, "mutating operation failed");
        ApiError::Unprocessable
    }

    /// Maps a store failure on a read-only path to 500, logging the cause
    /// that the envelope discards.
    pub fn internal(err: impl std::fmt::Display) -> Self {
        tracing::error!(cause = %err, "request failed");
        ApiError::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

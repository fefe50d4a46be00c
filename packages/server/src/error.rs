use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roomboard_surrealdb::repository::RepositoryError;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to API clients, rendered as the response envelope
/// `{"message": ..., "error": ...}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{detail}")]
    Validation { context: &'static str, detail: String },

    #[error("{detail}")]
    InvalidId { detail: String },

    #[error("Room not found")]
    NotFound,

    #[error("{detail}")]
    Store { context: &'static str, detail: String },
}

impl ApiError {
    pub fn validation(context: &'static str, detail: impl Into<String>) -> Self {
        ApiError::Validation { context, detail: detail.into() }
    }

    /// Map a repository failure onto the client-facing taxonomy, keeping
    /// the operation's envelope message as context.
    pub fn from_repository(context: &'static str, err: RepositoryError) -> Self {
        match err {
            RepositoryError::Validation { .. } => {
                ApiError::Validation { context, detail: err.to_string() }
            },
            RepositoryError::InvalidId { .. } => ApiError::InvalidId { detail: err.to_string() },
            RepositoryError::NotFound { .. } => ApiError::NotFound,
            other => ApiError::Store { context, detail: other.to_string() },
        }
    }

    /// Convert error to response parts (status, message, detail)
    pub fn to_response_parts(&self) -> (StatusCode, &'static str, Option<String>) {
        match self {
            ApiError::Validation { context, detail } => {
                (StatusCode::BAD_REQUEST, context, Some(detail.clone()))
            },
            ApiError::InvalidId { detail } => {
                (StatusCode::BAD_REQUEST, "Invalid room ID", Some(detail.clone()))
            },
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Room not found", None),
            ApiError::Store { context, detail } => {
                (StatusCode::INTERNAL_SERVER_ERROR, context, Some(detail.clone()))
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, detail) = self.to_response_parts();
        let mut response = json!({
            "message": message
        });

        if let Some(detail) = detail {
            if let serde_json::Value::Object(ref mut map) = response {
                map.insert("error".to_string(), serde_json::Value::String(detail));
            }
        }

        (status, Json(response)).into_response()
    }
}

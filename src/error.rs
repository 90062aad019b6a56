use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

/// Everything that can go wrong after input validation. Every variant maps
/// to an HTTP 500 with a variant-specific body; callers disambiguate by the
/// `error` field and the presence of `status`/`details`/`raw`.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Request timed out")]
    Timeout,

    #[error("{0}")]
    Upstream(String),

    #[error("OpenRouter API error (status {status})")]
    Api { status: u16, details: String },

    #[error("No choices returned")]
    NoChoices { raw: Value },
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RelayError::Timeout
        } else {
            RelayError::Upstream(err.to_string())
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let body = match self {
            RelayError::Timeout => json!({"error": "Request timed out"}),
            RelayError::Upstream(message) => json!({"error": message}),
            RelayError::Api { status, details } => json!({
                "error": "OpenRouter API error",
                "status": status,
                "details": details,
            }),
            RelayError::NoChoices { raw } => json!({
                "error": "No choices returned",
                "raw": raw,
            }),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

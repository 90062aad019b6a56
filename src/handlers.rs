use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::{models::ChatRequest, openrouter, AppState};

pub async fn health_check() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// Relay one user message to OpenRouter and return the model's reply.
/// Validation failures are answered without touching the upstream API.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Response {
    let message = request.message.trim();
    if message.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Message required"})),
        )
            .into_response();
    }

    match openrouter::complete(&state.client, &state.api_url, &state.api_key, message).await {
        Ok(reply) => Json(json!({"reply": reply})).into_response(),
        Err(error) => {
            tracing::error!("Chat completion failed: {error}");
            error.into_response()
        }
    }
}

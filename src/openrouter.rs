use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::error::RelayError;
use crate::models::{ChatMessage, CompletionRequest, ROLE_SYSTEM, ROLE_USER};
use crate::prompts::SYSTEM_PROMPT;

pub const MODEL: &str = "meta-llama/llama-3.3-70b-instruct:free";
pub const TEMPERATURE: f32 = 0.3;

const REFERER: &str = "http://localhost";
const TITLE: &str = "Ibicu AI";

/// Run one completion round-trip against OpenRouter and return the first
/// choice's content. The message is expected to be trimmed already; the
/// caller's timeout policy lives on `client`.
pub async fn complete(
    client: &Client,
    api_url: &str,
    api_key: &str,
    message: &str,
) -> Result<Box<str>, RelayError> {
    let request = CompletionRequest {
        model: MODEL,
        messages: [
            ChatMessage {
                role: ROLE_SYSTEM,
                content: SYSTEM_PROMPT,
            },
            ChatMessage {
                role: ROLE_USER,
                content: message,
            },
        ],
        temperature: TEMPERATURE,
    };

    let response = client
        .post(api_url)
        .bearer_auth(api_key)
        .header("HTTP-Referer", REFERER)
        .header("X-Title", TITLE)
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    if status != StatusCode::OK {
        let details = response.text().await.unwrap_or_default();
        return Err(RelayError::Api {
            status: status.as_u16(),
            details,
        });
    }

    let body: Value = response.json().await?;

    let has_choices = body
        .get("choices")
        .and_then(Value::as_array)
        .map_or(false, |choices| !choices.is_empty());
    if !has_choices {
        return Err(RelayError::NoChoices { raw: body });
    }

    Ok(body
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .into())
}

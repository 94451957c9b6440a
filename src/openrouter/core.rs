use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

/// Sampling temperature sent with every completion request.
pub const TEMPERATURE: f64 = 0.7;

/// OpenRouter uses these two headers to attribute requests to an app.
pub const HTTP_REFERER: &str = "http://localhost";
pub const APP_TITLE: &str = "Salsa AI Chatbot";

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

/// A single entry in the chat. The fields are private so a message
/// can't be changed once it's been added to a transcript.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Everything that can go wrong talking to the completions endpoint.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API responded with {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("unexpected response: {0}")]
    Malformed(String),
}

/// Sends the full list of `messages` to the chat completions endpoint
/// and returns the first choice as an assistant message.
pub async fn completion(
    messages: &[Message],
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<Message, CompletionError> {
    let payload = json!({
        "model": model,
        "messages": messages,
        "temperature": TEMPERATURE,
    });
    let url = format!(
        "{}/api/v1/chat/completions",
        api_hostname.trim_end_matches("/")
    );
    tracing::debug!(
        "Requesting completion from {} using {} with {} messages",
        url,
        model,
        messages.len()
    );

    let response = reqwest::Client::new()
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .header("HTTP-Referer", HTTP_REFERER)
        .header("X-Title", APP_TITLE)
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(CompletionError::Status { status, body });
    }

    let resp: Value = serde_json::from_str(&body)
        .map_err(|e| CompletionError::Malformed(format!("{}: {}", e, body)))?;

    let content = resp["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| CompletionError::Malformed(resp.to_string()))?;

    Ok(Message::new(Role::Assistant, content))
}

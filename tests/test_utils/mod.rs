//! Test utilities for integration tests
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{Value, json};

use salsa_chat::core::ChatConfig;
use salsa_chat::openrouter::default_model;

/// Config pointing at a mock server instead of OpenRouter.
pub fn test_config(api_hostname: &str) -> ChatConfig {
    ChatConfig {
        api_hostname: api_hostname.to_string(),
        api_key: String::from("test-api-key"),
        model: default_model(),
    }
}

/// Mocks a single successful completion that only matches when the
/// request body contains exactly `messages`.
pub async fn mock_completion(server: &mut ServerGuard, messages: Value, reply: &str) -> Mock {
    server
        .mock("POST", "/api/v1/chat/completions")
        .match_header("authorization", "Bearer test-api-key")
        .match_body(Matcher::Json(json!({
            "model": default_model().id,
            "messages": messages,
            "temperature": 0.7,
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"choices": [{"message": {"content": reply}}]}).to_string())
        .create_async()
        .await
}

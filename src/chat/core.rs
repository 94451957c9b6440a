use crate::core::ChatConfig;
use crate::openrouter::{CompletionError, Message, Role, completion};

use super::models::Session;

/// Stands in for the assistant reply whenever the completion fails so
/// that every user message is followed by exactly one reply.
pub const FALLBACK_REPLY: &str = "Sorry, something went wrong.";

/// The outcome of one turn of the chat.
#[derive(Debug)]
pub struct Turn {
    /// The assistant message that was added to the transcript
    pub reply: Message,
    /// Set when the completion failed and `reply` is the fallback
    pub error: Option<CompletionError>,
}

impl Turn {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Runs the next turn in chat by adding `prompt` to the session and
/// passing the whole transcript to the LLM for the next response.
///
/// This never fails. Errors from the API are logged, returned in the
/// `Turn` for display, and the fallback reply is recorded instead.
pub async fn next_turn(session: &mut Session, config: &ChatConfig, prompt: &str) -> Turn {
    session.push(Message::new(Role::User, prompt));

    let resp = completion(
        session.transcript().all(),
        &config.api_hostname,
        &config.api_key,
        config.model.id,
    )
    .await;

    let (reply, error) = match resp {
        Ok(msg) => (msg, None),
        Err(e) => {
            tracing::error!("Completion with {} failed: {}", config.model.id, e);
            (Message::new(Role::Assistant, FALLBACK_REPLY), Some(e))
        }
    };
    session.push(reply.clone());

    Turn { reply, error }
}

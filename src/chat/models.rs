//! The core models for managing a stateful chat with an LLM.
use crate::openrouter::Message;

/// Append-only history of a chat. There is intentionally no way to
/// remove or edit a message once it's been pushed.
#[derive(Clone, Debug, Default)]
pub struct Transcript(Vec<Message>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn append(&mut self, msg: Message) {
        self.0.push(msg)
    }

    pub fn all(&self) -> &[Message] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.0.iter()
    }
}

/// State for one interactive chat. Lives only as long as the process.
#[derive(Debug, Default)]
pub struct Session {
    transcript: Transcript,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn push(&mut self, msg: Message) {
        self.transcript.append(msg)
    }
}

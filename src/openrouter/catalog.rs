//! The fixed set of models offered in the chat.
use anyhow::{Result, anyhow};

#[derive(Debug, PartialEq, Eq)]
pub struct Model {
    /// Human readable name shown to the user
    pub name: &'static str,
    /// Identifier sent to the API
    pub id: &'static str,
}

pub const MODELS: &[Model] = &[
    Model {
        name: "Mistral 7B (Free)",
        id: "mistralai/mistral-7b-instruct:free",
    },
    Model {
        name: "Deepseek V3 0324 (Free)",
        id: "deepseek/deepseek-chat-v3-0324",
    },
    Model {
        name: "Google Gemini 2.5 Pro Experimental (Free)",
        id: "google/gemini-2.5-pro-exp:free",
    },
];

pub fn default_model() -> &'static Model {
    &MODELS[0]
}

/// Look up a model by its 1-based position in `MODELS`, its API id,
/// or its name (case insensitive).
pub fn find_model(query: &str) -> Option<&'static Model> {
    let query = query.trim();
    if let Ok(idx) = query.parse::<usize>() {
        return idx.checked_sub(1).and_then(|i| MODELS.get(i));
    }
    MODELS
        .iter()
        .find(|m| m.id == query || m.name.eq_ignore_ascii_case(query))
}

pub fn select_model(query: &str) -> Result<&'static Model> {
    find_model(query).ok_or_else(|| {
        let options = MODELS
            .iter()
            .map(|m| format!("\"{}\" ({})", m.name, m.id))
            .collect::<Vec<_>>()
            .join(", ");
        anyhow!("Unknown model `{}`. Choose one of: {}", query, options)
    })
}

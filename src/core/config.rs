use std::env;

use anyhow::Result;

use crate::openrouter::{Model, default_model, select_model};

pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";
pub const API_HOST_ENV: &str = "SALSA_API_HOST";
pub const MODEL_ENV: &str = "SALSA_MODEL";

pub const DEFAULT_API_HOSTNAME: &str = "https://openrouter.ai";

/// Settings used on each turn of the chat. Built once at startup and
/// updated by the REPL when the user switches model or key.
#[derive(Clone)]
pub struct ChatConfig {
    pub api_hostname: String,
    pub api_key: String,
    pub model: &'static Model,
}

impl ChatConfig {
    /// Build the config from optional user input falling back to the
    /// environment.
    pub fn resolve(user_api_key: Option<&str>, model_query: Option<&str>) -> Result<Self> {
        let api_hostname =
            env::var(API_HOST_ENV).unwrap_or_else(|_| DEFAULT_API_HOSTNAME.to_string());
        let api_key = resolve_credential(user_api_key, env::var(API_KEY_ENV).ok().as_deref());
        let model_query = model_query
            .map(String::from)
            .or_else(|| env::var(MODEL_ENV).ok());
        let model = match model_query {
            Some(query) => select_model(&query)?,
            None => default_model(),
        };

        if api_key.is_empty() {
            tracing::warn!(
                "No API key provided, set {} or pass --api-key. Requests will likely fail",
                API_KEY_ENV
            );
        }

        Ok(Self {
            api_hostname,
            api_key,
            model,
        })
    }

    pub fn set_model(&mut self, query: &str) -> Result<()> {
        self.model = select_model(query)?;
        Ok(())
    }

    /// Replace the user supplied key. An empty key falls back to the
    /// environment again.
    pub fn set_api_key(&mut self, user_api_key: &str) {
        self.api_key =
            resolve_credential(Some(user_api_key), env::var(API_KEY_ENV).ok().as_deref());
    }
}

/// Picks the credential in order of priority: user input, then the
/// environment, then an empty default. Blank values are skipped.
pub fn resolve_credential(user: Option<&str>, env_value: Option<&str>) -> String {
    [user, env_value]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .unwrap_or_default()
        .to_string()
}

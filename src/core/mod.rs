mod config;
pub use config::{
    API_HOST_ENV, API_KEY_ENV, ChatConfig, DEFAULT_API_HOSTNAME, MODEL_ENV, resolve_credential,
};

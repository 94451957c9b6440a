mod catalog;
mod core;
pub use catalog::{MODELS, Model, default_model, find_model, select_model};
pub use self::core::{
    APP_TITLE, CompletionError, HTTP_REFERER, Message, Role, TEMPERATURE, completion,
};

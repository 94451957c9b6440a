mod core;
pub mod export;
mod models;
pub use self::core::{FALLBACK_REPLY, Turn, next_turn};
pub use models::{Session, Transcript};

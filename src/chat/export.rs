//! Plain text export of a chat transcript.
use std::fs;
use std::path::Path;

use anyhow::{Result, bail};

use super::models::Transcript;
use crate::openrouter::Role;

pub const DEFAULT_EXPORT_FILE: &str = "salsa_chat_history.txt";

/// Renders each message as `You: ...` or `AI: ...` followed by a
/// blank line.
pub fn render(transcript: &Transcript) -> String {
    transcript
        .iter()
        .map(|msg| {
            let speaker = match msg.role() {
                Role::User => "You",
                Role::Assistant => "AI",
            };
            format!("{}: {}\n\n", speaker, msg.content())
        })
        .collect()
}

/// Writes the rendered transcript to `path`, replacing any existing
/// file.
pub fn write_transcript(path: &Path, transcript: &Transcript) -> Result<()> {
    if transcript.is_empty() {
        bail!("Nothing to export, the chat history is empty");
    }
    fs::write(path, render(transcript))?;
    tracing::info!(
        "Exported {} messages to {}",
        transcript.len(),
        path.display()
    );
    Ok(())
}

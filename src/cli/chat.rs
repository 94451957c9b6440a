use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use super::models::listing;
use crate::chat::export::{DEFAULT_EXPORT_FILE, render, write_transcript};
use crate::chat::{Session, next_turn};
use crate::core::ChatConfig;

const HELP: &str = "\
Commands:
  /help           Show this message
  /models         List the available models
  /model <model>  Switch model by name, id or number
  /key <key>      Use this OpenRouter API key (empty to reset)
  /history        Print the chat history
  /export [path]  Save the chat history to a text file
  /quit           End the session";

/// Slash commands entered at the prompt instead of a chat message.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Help,
    Models,
    Model(String),
    Key(String),
    History,
    Export(PathBuf),
    Quit,
}

impl ReplCommand {
    /// Parse the text following the leading `/`.
    fn parse(input: &str) -> Result<Self> {
        let (name, arg) = match input.trim().split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (input.trim(), ""),
        };
        let cmd = match name {
            "help" | "?" => ReplCommand::Help,
            "models" => ReplCommand::Models,
            "model" => {
                if arg.is_empty() {
                    bail!("Usage: /model <name, id or number>");
                }
                ReplCommand::Model(arg.to_string())
            }
            "key" => ReplCommand::Key(arg.to_string()),
            "history" => ReplCommand::History,
            "export" => {
                let path = if arg.is_empty() { DEFAULT_EXPORT_FILE } else { arg };
                ReplCommand::Export(PathBuf::from(path))
            }
            "quit" | "exit" => ReplCommand::Quit,
            other => bail!("Unknown command `/{}`, try /help", other),
        };
        Ok(cmd)
    }
}

fn print_banner(config: &ChatConfig) {
    println!("Salsa's AI Chatbot");
    println!("Free to use, fast and simple, text input only.");
    println!(
        "Chatting with {} ({}). Type /help for commands.",
        config.model.name, config.model.id
    );
}

fn export(path: &Path, session: &Session) {
    match write_transcript(path, session.transcript()) {
        Ok(()) => println!("Saved chat history to {}", path.display()),
        Err(err) => eprintln!("Error: {}", err),
    }
}

/// Returns `false` when the session should end.
fn handle_command(cmd: ReplCommand, config: &mut ChatConfig, session: &Session) -> bool {
    match cmd {
        ReplCommand::Help => println!("{}", HELP),
        ReplCommand::Models => print!("{}", listing(config.model)),
        ReplCommand::Model(query) => match config.set_model(&query) {
            Ok(()) => println!("Switched to {} ({})", config.model.name, config.model.id),
            Err(err) => eprintln!("Error: {}", err),
        },
        ReplCommand::Key(key) => {
            config.set_api_key(&key);
            if config.api_key.is_empty() {
                println!("No API key set");
            } else {
                println!("API key updated");
            }
        }
        ReplCommand::History => print!("{}", render(session.transcript())),
        ReplCommand::Export(path) => export(&path, session),
        ReplCommand::Quit => return false,
    }
    true
}

pub async fn run(
    model: Option<String>,
    api_key: Option<String>,
    export_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = ChatConfig::resolve(api_key.as_deref(), model.as_deref())?;
    let mut session = Session::new();
    let mut rl = DefaultEditor::new()?;

    print_banner(&config);

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                if let Some(input) = line.strip_prefix('/') {
                    match ReplCommand::parse(input) {
                        Ok(cmd) => {
                            if !handle_command(cmd, &mut config, &session) {
                                break;
                            }
                        }
                        Err(err) => eprintln!("{}", err),
                    }
                    continue;
                }

                let turn = next_turn(&mut session, &config, line).await;
                if let Some(err) = &turn.error {
                    eprintln!("Error: {}", err);
                }
                println!("{}", turn.reply.content());
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    if let Some(path) = export_path {
        if !session.transcript().is_empty() {
            export(&path, &session);
        }
    }

    Ok(())
}

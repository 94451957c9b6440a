use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod chat;
pub mod models;

#[derive(Subcommand)]
enum Command {
    /// Start a chat session (the default)
    Chat {
        /// Model to use, by name, id or number from `models`
        #[arg(long)]
        model: Option<String>,

        /// OpenRouter API key, takes priority over OPENROUTER_API_KEY
        #[arg(long)]
        api_key: Option<String>,

        /// Write the chat history to this file when the session ends
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// List the available models
    Models {},
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match args.command {
        Some(Command::Chat {
            model,
            api_key,
            export,
        }) => {
            chat::run(model, api_key, export).await?;
        }
        Some(Command::Models {}) => {
            models::run();
        }
        None => {
            chat::run(None, None, None).await?;
        }
    }

    Ok(())
}

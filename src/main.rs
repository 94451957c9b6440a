use anyhow::Result;
use salsa_chat::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}

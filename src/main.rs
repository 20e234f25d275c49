//! chatsum CLI
//!
//! Parses arguments, loads configuration and hands off to `worker::run`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use openai_api_rs::v1::common::GPT4;
use tracing::error;

use chatsum::core::config::AppConfig;
use chatsum::worker::{self, RunRequest};
use chatsum::LlmClient;

#[derive(Parser)]
#[command(name = "chatsum")]
#[command(version, about = "WhatsApp chat summarizer", long_about = None)]
struct Cli {
    /// Input file, export of the chat
    chat_export_file: PathBuf,
    /// Summary output file
    summary_file: PathBuf,
    /// When to start summarizing from (DD/MM/YYYY)
    start_date: String,
    /// Until when to summarize (DD/MM/YYYY)
    end_date: String,
    /// OpenAI model to use for summarization
    #[arg(long, default_value = GPT4)]
    model: String,
    /// Config file (defaults to ./config.toml, then ~/.config/chatsum/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Emit logs as JSON lines
    #[arg(long)]
    json: bool,
}

async fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?;
    let request = RunRequest::new(
        cli.chat_export_file,
        cli.summary_file,
        &cli.start_date,
        &cli.end_date,
        cli.model,
    )?;
    let client = LlmClient::from_config(&config)?;

    worker::run(&config, &client, &request).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    chatsum::setup_logging(cli.json);

    run(cli).await.inspect_err(|e| error!("{e}"))
}

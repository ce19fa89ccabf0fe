//! College Buddy CLI entry point.
//!
//! Provides `ask`, `serve`, `chat`, and `health` subcommands for one-shot
//! questions, a JSON-lines request loop, an interactive session, or a
//! liveness check.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

use college_buddy::chat::{ChatEngine, ChatReply, ChatRequest};
use college_buddy::config::{load_config, load_default_config, Config};
use college_buddy::health::check_health;
use college_buddy::logging;
use college_buddy::serve;
use college_buddy::session::Session;

/// Interactive commands log at this level unless `RUST_LOG` says otherwise.
const QUIET_LEVEL: &str = "warn";

/// College Buddy: keyword-routed campus assistant.
#[derive(Parser)]
#[command(name = "college-buddy", version, about)]
struct Cli {
    /// Path to a config file (default: ~/.college-buddy/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Command {
    /// Answer a single message and print the JSON reply.
    Ask {
        /// Message words; joined with spaces.
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Read JSON requests from stdin, one per line, and answer on stdout.
    Serve,
    /// Start an interactive chat session.
    Chat,
    /// Print the health descriptor.
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => load_default_config().context("failed to load default config")?,
    };

    match cli.command {
        Command::Ask { message } => handle_ask(&config, &message.join(" ")),
        Command::Serve => handle_serve(&config).await,
        Command::Chat => handle_chat(&config).await,
        Command::Health => handle_health(),
    }
}

/// Answer one message.
fn handle_ask(config: &Config, message: &str) -> anyhow::Result<()> {
    logging::init_cli(QUIET_LEVEL);

    let engine = ChatEngine::from_config(&config.chat)?;
    let reply = engine.handle(&ChatRequest::new(message));
    println!("{}", serde_json::to_string_pretty(&reply)?);

    match reply {
        ChatReply::Success(_) => Ok(()),
        ChatReply::Failure { body, .. } => anyhow::bail!("{}", body.error),
    }
}

/// Run the JSON-lines request loop on stdin/stdout.
async fn handle_serve(config: &Config) -> anyhow::Result<()> {
    let _logging_guard = match &config.logging.json_dir {
        Some(dir) => Some(logging::init_production(dir, &config.logging.level)?),
        None => {
            logging::init_cli(&config.logging.level);
            None
        }
    };

    let engine = ChatEngine::from_config(&config.chat)?;
    info!(rules = engine.rules().len(), "college buddy serving on stdio");

    let stdin = BufReader::new(tokio::io::stdin());
    serve::run(&engine, stdin, tokio::io::stdout()).await?;
    Ok(())
}

/// Run an interactive session until `/quit` or EOF.
async fn handle_chat(config: &Config) -> anyhow::Result<()> {
    logging::init_cli(QUIET_LEVEL);

    let engine = ChatEngine::from_config(&config.chat)?;
    let mut session = Session::new(config.chat.history_limit);
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if let Some(welcome) = session.turns().first() {
        stdout
            .write_all(format!("{}\n", welcome.content).as_bytes())
            .await?;
    }

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await.context("failed to read input")? else {
            break;
        };
        if line.trim() == "/quit" {
            break;
        }

        if let Some(turn) = session.send(&engine, &line) {
            stdout
                .write_all(format!("\n{}\n\n", turn.content).as_bytes())
                .await?;
        }
    }

    Ok(())
}

/// Print the health descriptor.
fn handle_health() -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&check_health())?);
    Ok(())
}

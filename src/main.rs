//! Main entry point for the Japanese to English translator

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ja_en_translator::cli::commands::{self, Commands};

/// Japanese to English Translator - HTTP API over opus-mt-ja-en
#[derive(Parser, Debug)]
#[command(name = "ja-en-translator", version, about, long_about = None)]
struct Args {
    /// Configuration file (YAML, TOML or JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    // Binary and library share the crate name
    let default_filter = format!("{}={}", env!("CARGO_CRATE_NAME"), log_level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Execute command
    match args.command {
        Some(Commands::Server { host, port }) => {
            commands::handle_server(args.config, host, port).await?;
        }
        Some(Commands::Translate { texts }) => {
            commands::handle_translate(args.config, texts).await?;
        }
        None => {
            commands::handle_server(args.config, None, None).await?;
        }
    }

    Ok(())
}

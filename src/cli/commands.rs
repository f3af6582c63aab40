//! CLI command definitions and handlers

use clap::Subcommand;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::core::config::ServiceConfig;
use crate::core::models::{BatchRequest, TranslationRequest};
use crate::core::provider::RemoteProvider;
use crate::core::service::TranslationService;

/// Commands for the translator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP API server
    Server {
        /// Bind address (default: 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Listen port (default: 8000)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Translate texts once and print the JSON result
    Translate {
        /// Japanese texts; more than one is sent as a batch
        #[arg(required = true)]
        texts: Vec<String>,
    },
}

/// Handle server command
pub async fn handle_server(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    use crate::server::api::run_server;

    let mut config = ServiceConfig::load(config_path.as_deref())?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    info!("Starting HTTP server on {}", config.bind_address());
    println!("🚀 Server starting on http://{}", config.bind_address());
    println!("📊 API Documentation: http://{}/docs", config.bind_address());

    run_server(config).await
}

/// Handle translate command
pub async fn handle_translate(config_path: Option<PathBuf>, texts: Vec<String>) -> anyhow::Result<()> {
    let config = ServiceConfig::load(config_path.as_deref())?;
    let provider = Arc::new(RemoteProvider::load(&config).await?);
    let service = TranslationService::from_config(provider, &config);

    let output = translate_texts(&service, texts).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// One text goes through `/translate` semantics, several through the batch path
pub async fn translate_texts(
    service: &TranslationService,
    mut texts: Vec<String>,
) -> anyhow::Result<serde_json::Value> {
    let value = if texts.len() == 1 {
        let text = texts.remove(0);
        serde_json::to_value(service.translate(TranslationRequest::new(text)).await?)?
    } else {
        serde_json::to_value(service.translate_batch(BatchRequest { texts }).await?)?
    };

    Ok(value)
}

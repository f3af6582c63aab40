//! Japanese to English Translator - HTTP API over a pretrained opus-mt model
//!
//! The library validates translation requests, bounds batch sizes and
//! dispatches to a [`ModelProvider`] that owns the loaded model.

#![forbid(unsafe_code)]

pub mod cli;
pub mod core;
pub mod server;

// Re-export key types for convenience
pub use crate::core::{
    config::ServiceConfig,
    errors::TranslationError,
    models::{BatchRequest, BatchResult, ModelSpec, TranslationRequest, TranslationResult},
    provider::{ModelProvider, RemoteProvider},
    service::TranslationService,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

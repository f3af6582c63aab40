//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::core::errors::{Result, TranslationError};
use crate::core::models::ModelSpec;

/// Environment variable prefix, e.g. `TRANSLATOR_PORT=9000`
pub const ENV_PREFIX: &str = "TRANSLATOR";

/// Pinned model identifier
pub const DEFAULT_MODEL_ID: &str = "Helsinki-NLP/opus-mt-ja-en";

/// Pinned model revision
pub const DEFAULT_MODEL_REVISION: &str = "e1b0895a1cb46d229c140658331bd34bd3e0bfee";

/// Largest batch accepted by `/translate/batch`; not configurable
pub const MAX_BATCH_SIZE: usize = 32;

/// Runtime base used when no `inference_url` is configured
pub const DEFAULT_INFERENCE_BASE: &str = "https://api-inference.huggingface.co/models";

/// Configuration for the translation service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub model_id: String,
    pub model_revision: String,
    /// Full runtime URL; derived from `model_id` when unset
    pub inference_url: Option<String>,
    pub api_token: Option<String>,
    pub max_concurrent_inference: usize,
    pub timeout_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            model_id: DEFAULT_MODEL_ID.to_string(),
            model_revision: DEFAULT_MODEL_REVISION.to_string(),
            inference_url: None,
            api_token: None,
            max_concurrent_inference: 4,
            timeout_ms: 60000,
        }
    }
}

impl ServiceConfig {
    /// Load configuration: defaults, then the optional file, then `TRANSLATOR_*` variables
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            info!("Loading configuration from {}", path.display());
            builder = builder.add_source(::config::File::from(path).required(true));
        }

        let settings = builder
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let mut config: Self = settings.try_deserialize()?;

        if config.api_token.is_none() {
            config.api_token = std::env::var("HF_TOKEN").ok().filter(|t| !t.is_empty());
        }

        debug!("Resolved configuration: {:?}", config.redacted());
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.model_id.trim().is_empty() {
            return Err(config_error("model_id is required"));
        }

        if self.model_revision.trim().is_empty() {
            return Err(config_error("model_revision is required"));
        }

        if self.inference_url.as_deref().is_some_and(|url| url.trim().is_empty()) {
            return Err(config_error("inference_url must not be empty when set"));
        }

        if self.max_concurrent_inference == 0 {
            return Err(config_error("max_concurrent_inference must be greater than 0"));
        }

        if self.timeout_ms == 0 {
            return Err(config_error("timeout_ms must be greater than 0"));
        }

        Ok(())
    }

    /// Model identity this configuration pins
    pub fn model_spec(&self) -> ModelSpec {
        ModelSpec::new(&self.model_id, &self.model_revision)
    }

    /// Runtime endpoint serving `model_id`
    pub fn endpoint(&self) -> String {
        match &self.inference_url {
            Some(url) => url.clone(),
            None => format!("{}/{}", DEFAULT_INFERENCE_BASE, self.model_id.trim()),
        }
    }

    /// Listener address as `host:port`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.api_token.is_some() {
            copy.api_token = Some("***".to_string());
        }
        copy
    }
}

fn config_error(message: &str) -> TranslationError {
    TranslationError::ConfigError {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = ServiceConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(
            config.endpoint(),
            "https://api-inference.huggingface.co/models/Helsinki-NLP/opus-mt-ja-en"
        );
        assert_eq!(config.model_spec().revision, DEFAULT_MODEL_REVISION);
    }

    #[test]
    fn test_endpoint_follows_model_id() {
        let config = ServiceConfig {
            model_id: "Helsinki-NLP/opus-mt-en-de".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.endpoint(),
            "https://api-inference.huggingface.co/models/Helsinki-NLP/opus-mt-en-de"
        );

        let config = ServiceConfig {
            inference_url: Some("http://127.0.0.1:8080/translate".to_string()),
            ..config
        };
        assert_eq!(config.endpoint(), "http://127.0.0.1:8080/translate");
    }

    #[test]
    fn test_config_validation_blank_url() {
        let config = ServiceConfig {
            inference_url: Some(" ".to_string()),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_zero_permits() {
        let config = ServiceConfig {
            max_concurrent_inference: 0,
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_missing_model() {
        let config = ServiceConfig {
            model_id: "  ".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            config.validate(),
            Err(TranslationError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_load_from_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "port: 9100").unwrap();
        writeln!(file, "max_concurrent_inference: 1").unwrap();
        writeln!(file, "inference_url: http://127.0.0.1:8080/translate").unwrap();

        let config = ServiceConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.max_concurrent_inference, 1);
        assert_eq!(config.endpoint(), "http://127.0.0.1:8080/translate");
        // Unset keys fall back to defaults
        assert_eq!(config.model_id, DEFAULT_MODEL_ID);
    }

    #[test]
    fn test_load_rejects_invalid_file_values() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "timeout_ms: 0").unwrap();

        assert!(ServiceConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        assert!(ServiceConfig::load(Some(&path)).is_err());
    }
}

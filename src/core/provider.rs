//! Model provider abstraction and the HTTP inference runtime client

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::core::config::ServiceConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::ModelSpec;

/// Sentence used to check the model answers before the API accepts traffic
const WARMUP_TEXT: &str = "こんにちは。";

/// Owner of a loaded translation model.
///
/// Implementations must be safe to call from several handlers at once;
/// callers bound concurrency themselves.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Identity of the loaded model
    fn spec(&self) -> &ModelSpec;

    /// Whether the served weights are guaranteed to match `spec().revision`
    fn enforces_revision(&self) -> bool {
        false
    }

    /// Translate a single text
    async fn translate_one(&self, text: &str) -> Result<String>;

    /// Translate a batch; the output has one entry per input, in order
    async fn translate_many(&self, texts: &[String]) -> Result<Vec<String>>;
}

/// One item of a translation pipeline response
#[derive(Debug, Deserialize)]
struct PipelineOutput {
    translation_text: String,
}

/// Error body returned by the inference runtime
#[derive(Debug, Deserialize)]
struct RuntimeError {
    error: String,
}

/// Provider backed by an inference runtime speaking the Hugging Face
/// translation pipeline protocol.
#[derive(Debug, Clone)]
pub struct RemoteProvider {
    client: reqwest::Client,
    endpoint: String,
    api_token: Option<String>,
    spec: ModelSpec,
}

impl RemoteProvider {
    /// Build a client for the configured runtime without contacting it
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .pool_max_idle_per_host(config.max_concurrent_inference)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
            api_token: config.api_token.clone(),
            spec: config.model_spec(),
        })
    }

    /// Build the client and run a warm-up translation.
    ///
    /// Any failure is reported as [`TranslationError::ModelUnavailable`].
    pub async fn load(config: &ServiceConfig) -> Result<Self> {
        let provider = Self::new(config)?;
        info!("Loading model {} via {}", provider.spec, provider.endpoint);

        match provider.translate_one(WARMUP_TEXT).await {
            Ok(output) => {
                debug!("Warm-up translation: {:?}", output);
                info!("Model loaded: {}", provider.spec);
                warn!(
                    "Revision {} is advisory: the runtime at {} decides which weights it serves",
                    provider.spec.revision, provider.endpoint
                );
                Ok(provider)
            }
            Err(e) => Err(TranslationError::ModelUnavailable {
                model: provider.spec.to_string(),
                message: e.to_string(),
            }),
        }
    }

    /// Send one pipeline request and decode its translations
    async fn send_request(&self, inputs: serde_json::Value) -> Result<Vec<String>> {
        let body = serde_json::json!({
            "inputs": inputs,
            "options": { "wait_for_model": true }
        });

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TranslationError::provider(format!("request failed: {}", e)))?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<RuntimeError>(&text)
                .map(|e| e.error)
                .unwrap_or(text);
            warn!("Inference runtime returned {}: {}", status, message);
            return Err(TranslationError::provider(format!(
                "runtime returned {}: {}",
                status.as_u16(),
                message
            )));
        }

        let outputs: Vec<PipelineOutput> = serde_json::from_str(&text)
            .map_err(|e| TranslationError::provider(format!("invalid runtime response: {}", e)))?;

        Ok(outputs.into_iter().map(|o| o.translation_text).collect())
    }
}

#[async_trait]
impl ModelProvider for RemoteProvider {
    fn spec(&self) -> &ModelSpec {
        &self.spec
    }

    async fn translate_one(&self, text: &str) -> Result<String> {
        let mut outputs = self.send_request(serde_json::json!(text)).await?;

        if outputs.len() != 1 {
            return Err(TranslationError::provider(format!(
                "expected 1 translation, runtime returned {}",
                outputs.len()
            )));
        }

        Ok(outputs.remove(0))
    }

    async fn translate_many(&self, texts: &[String]) -> Result<Vec<String>> {
        self.send_request(serde_json::json!(texts)).await
    }
}

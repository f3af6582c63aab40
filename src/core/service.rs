//! Request validation and dispatch to the model provider

use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::core::config::{ServiceConfig, MAX_BATCH_SIZE};
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{
    BatchRequest, BatchResult, ModelInfo, TranslationRequest, TranslationResult,
};
use crate::core::provider::ModelProvider;

/// Validates requests and hands them to the provider under a permit
pub struct TranslationService {
    provider: Arc<dyn ModelProvider>,
    permits: Semaphore,
    max_batch_size: usize,
}

impl TranslationService {
    /// `max_concurrent_inference` of 1 serializes every provider call
    pub fn new(
        provider: Arc<dyn ModelProvider>,
        max_batch_size: usize,
        max_concurrent_inference: usize,
    ) -> Self {
        Self {
            provider,
            permits: Semaphore::new(max_concurrent_inference.max(1)),
            max_batch_size,
        }
    }

    /// Service with the fixed batch limit and the configured inference permits
    pub fn from_config(provider: Arc<dyn ModelProvider>, config: &ServiceConfig) -> Self {
        Self::new(provider, MAX_BATCH_SIZE, config.max_concurrent_inference)
    }

    pub fn max_batch_size(&self) -> usize {
        self.max_batch_size
    }

    /// Metadata about the loaded model
    pub fn model_info(&self) -> ModelInfo {
        let spec = self.provider.spec();
        ModelInfo {
            id: spec.id.clone(),
            revision: spec.revision.clone(),
            revision_enforced: self.provider.enforces_revision(),
            max_batch_size: self.max_batch_size,
        }
    }

    /// Translate one text. Blank input is rejected before the provider runs.
    pub async fn translate(&self, request: TranslationRequest) -> Result<TranslationResult> {
        if request.text.trim().is_empty() {
            return Err(TranslationError::invalid("Text cannot be empty"));
        }

        let translation = {
            let _permit = self.acquire().await?;
            self.provider.translate_one(&request.text).await?
        };
        debug!("Translated {} chars", request.text.chars().count());

        Ok(TranslationResult {
            input: request.text,
            translation,
        })
    }

    /// Translate a whole batch in one provider call; all or nothing
    pub async fn translate_batch(&self, request: BatchRequest) -> Result<BatchResult> {
        if request.texts.is_empty() {
            return Err(TranslationError::invalid("Texts list cannot be empty"));
        }
        if request.texts.len() > self.max_batch_size {
            return Err(TranslationError::invalid(format!(
                "Maximum batch size is {}",
                self.max_batch_size
            )));
        }

        let translations = {
            let _permit = self.acquire().await?;
            self.provider.translate_many(&request.texts).await?
        };

        if translations.len() != request.texts.len() {
            warn!(
                "Provider returned {} translations for {} inputs",
                translations.len(),
                request.texts.len()
            );
            return Err(TranslationError::provider(format!(
                "expected {} translations, got {}",
                request.texts.len(),
                translations.len()
            )));
        }
        debug!("Translated batch of {}", request.texts.len());

        Ok(BatchResult::zip(request.texts, translations))
    }

    async fn acquire(&self) -> Result<tokio::sync::SemaphorePermit<'_>> {
        self.permits
            .acquire()
            .await
            .map_err(|e| TranslationError::provider(format!("inference permits closed: {}", e)))
    }
}

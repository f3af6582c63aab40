//! Core data models for translation

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identity of the pretrained model served by a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSpec {
    pub id: String,
    pub revision: String,
}

impl ModelSpec {
    pub fn new(id: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            revision: revision.into(),
        }
    }
}

impl std::fmt::Display for ModelSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.id, self.revision)
    }
}

/// Single-text translation request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"text": "私は日本語を話します。"}))]
pub struct TranslationRequest {
    pub text: String,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Translation result pairing the untouched input with its translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TranslationResult {
    pub input: String,
    pub translation: String,
}

/// Batch translation request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"texts": ["私は日本語を話します。", "東京は日本の首都です。"]}))]
pub struct BatchRequest {
    pub texts: Vec<String>,
}

/// Batch translation result, `results[i]` belongs to `texts[i]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BatchResult {
    pub results: Vec<TranslationResult>,
}

impl BatchResult {
    /// Pair inputs with outputs in order. Callers must check the lengths match.
    pub fn zip(texts: Vec<String>, translations: Vec<String>) -> Self {
        let results = texts
            .into_iter()
            .zip(translations)
            .map(|(input, translation)| TranslationResult { input, translation })
            .collect();
        Self { results }
    }
}

/// Static service descriptor served at `/`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ServiceInfo {
    pub message: String,
    pub docs: String,
}

/// Liveness status served at `/health`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
}

/// Loaded model metadata served at `/model`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ModelInfo {
    pub id: String,
    pub revision: String,
    /// False when the runtime cannot be held to `revision`
    pub revision_enforced: bool,
    pub max_batch_size: usize,
}

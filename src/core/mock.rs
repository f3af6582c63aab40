//! In-process provider used by the test suites

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::errors::{Result, TranslationError};
use crate::core::models::ModelSpec;
use crate::core::provider::ModelProvider;

/// Behavior mode for the fake provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FakeBehavior {
    /// Prefixes every input with `EN:`
    Working,
    /// Every call fails
    Failing,
    /// Batches come back one translation short
    ShortBatch,
}

/// Deterministic provider that counts its invocations
#[derive(Debug)]
pub struct FakeProvider {
    behavior: FakeBehavior,
    calls: AtomicUsize,
    spec: ModelSpec,
}

impl FakeProvider {
    pub fn new(behavior: FakeBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            spec: ModelSpec::new("fake/opus-mt-ja-en", "test"),
        }
    }

    pub fn working() -> Self {
        Self::new(FakeBehavior::Working)
    }

    pub fn failing() -> Self {
        Self::new(FakeBehavior::Failing)
    }

    pub fn short_batch() -> Self {
        Self::new(FakeBehavior::ShortBatch)
    }

    /// Number of provider calls so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn render(text: &str) -> String {
        format!("EN:{}", text)
    }
}

#[async_trait]
impl ModelProvider for FakeProvider {
    fn spec(&self) -> &ModelSpec {
        &self.spec
    }

    async fn translate_one(&self, text: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            FakeBehavior::Failing => Err(TranslationError::provider("simulated runtime error")),
            _ => Ok(Self::render(text)),
        }
    }

    async fn translate_many(&self, texts: &[String]) -> Result<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            FakeBehavior::Working => Ok(texts.iter().map(|t| Self::render(t)).collect()),
            FakeBehavior::Failing => Err(TranslationError::provider("simulated runtime error")),
            FakeBehavior::ShortBatch => Ok(texts
                .iter()
                .skip(1)
                .map(|t| Self::render(t))
                .collect()),
        }
    }
}

//! Mock implementations for testing.
//!
//! Provides a deterministic embedding provider and a configurable LLM
//! client so tests can exercise the full pipeline without network calls.

use async_trait::async_trait;
use quaero::llm::LLMClient;
use quaero::rag::embeddings::EmbeddingProvider;
use quaero::types::{AppError, Result};
use std::sync::Mutex;

/// Dimensionality of mock embeddings.
pub const MOCK_DIM: usize = 64;

/// Deterministic bag-of-words embedder.
///
/// Tokens are lowercased, hashed (FNV-1a) into a fixed number of buckets,
/// and counted. Texts sharing words produce genuinely similar vectors
/// under cosine similarity, so retrieval behaves like the real thing
/// while staying fully reproducible.
pub struct MockEmbedder {
    should_fail: bool,
}

impl MockEmbedder {
    pub fn new() -> Self {
        Self { should_fail: false }
    }

    /// Create an embedder that always returns an error.
    pub fn failing() -> Self {
        Self { should_fail: true }
    }

    fn embed(text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; MOCK_DIM];
        for token in text
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            vector[bucket(token)] += 1.0;
        }
        vector
    }
}

fn bucket(token: &str) -> usize {
    // FNV-1a
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in token.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    (hash % MOCK_DIM as u64) as usize
}

#[async_trait]
impl EmbeddingProvider for MockEmbedder {
    async fn embed_texts(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if self.should_fail {
            return Err(AppError::Embedding("Mock embedding failure".to_string()));
        }
        Ok(texts.iter().map(|t| Self::embed(t)).collect())
    }
}

/// Mock LLM client with a canned response that records every prompt it
/// receives, so tests can assert on the context the pipeline assembled.
pub struct MockLLMClient {
    response: String,
    should_fail: bool,
    prompts: Mutex<Vec<String>>,
}

impl MockLLMClient {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            should_fail: false,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Create a client that always returns an error.
    pub fn failing() -> Self {
        Self {
            response: String::new(),
            should_fail: true,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// The most recent prompt this client was asked to complete.
    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LLMClient for MockLLMClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        if self.should_fail {
            return Err(AppError::Generation("Mock LLM failure".to_string()));
        }
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.response.clone())
    }

    async fn generate_with_system(&self, _system: &str, prompt: &str) -> Result<String> {
        self.generate(prompt).await
    }

    fn model_name(&self) -> &str {
        "mock-llm"
    }
}

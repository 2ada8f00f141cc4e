//! Shared helpers for integration tests.

// Not every test binary uses every helper.
#![allow(dead_code)]

pub mod mocks;

use self::mocks::{MockEmbedder, MockLLMClient};
use quaero::rag::pipeline::{PipelineOptions, RagPipeline};
use quaero::utils::config::{Config, ProviderConfig, RagConfig, ServerConfig};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Pipeline options pointing at a test index directory.
pub fn test_options(index_path: &Path) -> PipelineOptions {
    PipelineOptions {
        index_path: index_path.to_path_buf(),
        chunk_size: 1000,
        chunk_overlap: 200,
        retrieval_k: 4,
        provider_timeout: Duration::from_secs(5),
    }
}

/// A pipeline wired to deterministic mocks. Returns the mock LLM so tests
/// can inspect the prompts the pipeline produced.
pub fn test_pipeline(index_path: &Path, llm_response: &str) -> (Arc<RagPipeline>, Arc<MockLLMClient>) {
    let embedder = Arc::new(MockEmbedder::new());
    let llm = Arc::new(MockLLMClient::new(llm_response));
    let pipeline = Arc::new(RagPipeline::new(
        embedder,
        llm.clone(),
        test_options(index_path),
    ));
    (pipeline, llm)
}

/// A pipeline whose embedding provider always fails.
pub fn failing_embedder_pipeline(index_path: &Path) -> Arc<RagPipeline> {
    let embedder = Arc::new(MockEmbedder::failing());
    let llm = Arc::new(MockLLMClient::new("unused"));
    Arc::new(RagPipeline::new(embedder, llm, test_options(index_path)))
}

/// Config for HTTP-level tests; provider fields are never dialed.
pub fn test_config(index_path: &Path) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        providers: ProviderConfig {
            openai_api_key: "test-key".to_string(),
            openai_api_base: "http://localhost:0".to_string(),
            embedding_model: "mock".to_string(),
            chat_model: "mock".to_string(),
            timeout_secs: 5,
        },
        rag: RagConfig {
            index_path: index_path.to_path_buf(),
            chunk_size: 1000,
            chunk_overlap: 200,
            retrieval_k: 4,
        },
    }
}

//! # Quaero
//!
//! A retrieval-augmented question-answering server built in Rust: ingest
//! text documents, index their embeddings in a persistent embedded vector
//! index, and answer natural-language questions grounded in the retrieved
//! context.
//!
//! ## Overview
//!
//! Quaero can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `quaero-server` binary
//! 2. **As a library** - Import the pipeline into your own Rust project
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use quaero::{
//!     llm::OpenAIClient,
//!     rag::embeddings::OpenAIEmbedder,
//!     rag::pipeline::{PipelineOptions, RagPipeline},
//!     types::Document,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_key = std::env::var("OPENAI_API_KEY")?;
//!     let api_base = "https://api.openai.com/v1".to_string();
//!
//!     let embedder = Arc::new(OpenAIEmbedder::new(
//!         api_key.clone(),
//!         api_base.clone(),
//!         "text-embedding-3-small".to_string(),
//!     ));
//!     let llm = Arc::new(OpenAIClient::new(api_key, api_base, "gpt-4o-mini".to_string()));
//!
//!     let pipeline = RagPipeline::new(embedder, llm, PipelineOptions::default());
//!     pipeline.init().await;
//!
//!     pipeline
//!         .ingest(vec![Document::new("notes.txt", "The capital of France is Paris.")])
//!         .await?;
//!     let answer = pipeline.answer("What is the capital of France?").await?;
//!     println!("{}", answer);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! documents → Chunker → chunks → EmbeddingProvider → vectors ─┐
//!                                                              ▼
//!                                             VectorIndex (persisted)
//!                                                              │
//! query → EmbeddingProvider → vector → top-k search ───────────┘
//!                                        │
//!                         context + question → LLMClient → answer
//! ```
//!
//! The index is flushed to disk before any ingestion reports success and
//! reloaded on startup; a corrupt index degrades to the empty state
//! instead of failing the process.
//!
//! ## Modules
//!
//! - [`api`] - REST API handlers and routes
//! - [`llm`] - Generation provider clients
//! - [`rag`] - Chunker, embedding seam, and the pipeline orchestrator
//! - [`types`] - Common types and error handling
//! - [`utils`] - Configuration

#![warn(missing_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Generation provider clients and abstractions.
pub mod llm;
/// Retrieval-augmented generation pipeline.
pub mod rag;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use llm::{LLMClient, OpenAIClient};
pub use rag::chunker::TextChunker;
pub use rag::embeddings::{EmbeddingProvider, OpenAIEmbedder};
pub use rag::pipeline::{PipelineOptions, PipelineStatus, RagPipeline};
pub use types::{AppError, Result};
pub use utils::config::Config;

use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Service configuration
    pub config: Arc<Config>,
    /// The RAG pipeline; owns the vector index lifecycle
    pub pipeline: Arc<RagPipeline>,
}

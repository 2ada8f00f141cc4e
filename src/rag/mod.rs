//! Retrieval Augmented Generation (RAG) pipeline.
//!
//! This module owns the full document-to-answer flow and the persistent
//! vector index lifecycle behind it.
//!
//! # Module Structure
//!
//! - [`rag::chunker`](crate::rag::chunker) - Overlapping text windows for embedding
//! - [`rag::embeddings`](crate::rag::embeddings) - Embedding provider seam (OpenAI-compatible)
//! - [`rag::pipeline`](crate::rag::pipeline) - The orchestrator and its index lifecycle
//!
//! # Pipeline Flow
//!
//! 1. **Ingestion** - Documents are chunked, embedded, appended to the
//!    index, and the index is flushed to disk before success is reported
//! 2. **Retrieval** - The query is embedded and the top-k most similar
//!    chunks are fetched from the index
//! 3. **Generation** - Retrieved chunk texts are assembled into a prompt
//!    and handed to the generation provider
//!
//! On startup the pipeline loads a previously persisted index if one
//! exists; a corrupt index degrades to the empty state instead of failing
//! the process.

pub mod chunker;
pub mod embeddings;
pub mod pipeline;

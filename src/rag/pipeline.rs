//! The RAG pipeline orchestrator.
//!
//! Owns the process-wide vector index reference and drives both halves of
//! the system: ingestion (chunk → embed → index → persist) and answering
//! (embed query → retrieve top-k → assemble prompt → generate).

use crate::llm::LLMClient;
use crate::rag::chunker::TextChunker;
use crate::rag::embeddings::EmbeddingProvider;
use crate::types::{AppError, Document, Result};
use crate::utils::config::Config;
use arc_swap::ArcSwapOption;
use quaero_index::{persistence, DistanceMetric, IndexRecord, StoredChunk, VectorIndex};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

/// System prompt used for answer generation.
const ANSWER_SYSTEM_PROMPT: &str = "Use the provided context to answer the user's question. \
     If the context does not contain the answer, say that you don't know \
     instead of making one up.";

/// Tunables for the pipeline, usually derived from [`Config`].
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Directory holding the persisted index.
    pub index_path: PathBuf,
    /// Maximum chunk size in characters.
    pub chunk_size: usize,
    /// Overlap between consecutive chunks in characters.
    pub chunk_overlap: usize,
    /// Number of chunks retrieved per query.
    pub retrieval_k: usize,
    /// Upper bound on any single provider call.
    pub provider_timeout: Duration,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            index_path: PathBuf::from("data/index"),
            chunk_size: 1000,
            chunk_overlap: 200,
            retrieval_k: 4,
            provider_timeout: Duration::from_secs(30),
        }
    }
}

impl From<&Config> for PipelineOptions {
    fn from(config: &Config) -> Self {
        Self {
            index_path: config.rag.index_path.clone(),
            chunk_size: config.rag.chunk_size,
            chunk_overlap: config.rag.chunk_overlap,
            retrieval_k: config.rag.retrieval_k,
            provider_timeout: config.providers.timeout(),
        }
    }
}

/// Snapshot of the pipeline's readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStatus {
    /// True once an index is bound (loaded or created).
    pub ready: bool,
}

/// The RAG pipeline.
///
/// Holds exactly one rebindable index reference. Queries read it lock-free;
/// ingestions are serialized by an internal writer lock and always flush
/// the index to disk before reporting success, so a restart never loses an
/// acknowledged ingestion.
pub struct RagPipeline {
    chunker: TextChunker,
    embedder: Arc<dyn EmbeddingProvider>,
    llm: Arc<dyn LLMClient>,
    index_path: PathBuf,
    retrieval_k: usize,
    provider_timeout: Duration,
    /// The current index; `None` until the first load or ingestion.
    index: ArcSwapOption<VectorIndex>,
    /// Single-writer guard: ingestions must not interleave with each other
    /// or with persistence.
    ingest_lock: Mutex<()>,
}

impl RagPipeline {
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        llm: Arc<dyn LLMClient>,
        options: PipelineOptions,
    ) -> Self {
        Self {
            chunker: TextChunker::new(options.chunk_size, options.chunk_overlap),
            embedder,
            llm,
            index_path: options.index_path,
            retrieval_k: options.retrieval_k,
            provider_timeout: options.provider_timeout,
            index: ArcSwapOption::empty(),
            ingest_lock: Mutex::new(()),
        }
    }

    /// Load a previously persisted index, or start empty.
    ///
    /// Must complete before the pipeline accepts ingest/query calls. A
    /// corrupt or unreadable index is logged and treated as "no index";
    /// startup never fails on it.
    #[instrument(skip(self))]
    pub async fn init(&self) {
        if !persistence::index_exists(&self.index_path) {
            info!(path = %self.index_path.display(), "No existing index found; create one via ingestion");
            return;
        }

        match persistence::load_index(&self.index_path).await {
            Ok(index) => {
                info!(
                    path = %self.index_path.display(),
                    records = index.len(),
                    dimensions = index.dimensions(),
                    "Loaded existing index"
                );
                self.index.store(Some(Arc::new(index)));
            }
            Err(e) => {
                warn!(
                    path = %self.index_path.display(),
                    error = %e,
                    "Failed to load persisted index, starting empty"
                );
                self.index.store(None);
            }
        }
    }

    /// Ingest documents: chunk, embed, index, persist.
    ///
    /// Returns the number of chunks added. The index is flushed to disk
    /// before this returns `Ok`; an embedding failure leaves both the
    /// in-memory index and the persisted index untouched.
    #[instrument(skip(self, documents), fields(documents = documents.len()))]
    pub async fn ingest(&self, documents: Vec<Document>) -> Result<usize> {
        if documents.iter().all(|d| d.text.trim().is_empty()) {
            return Err(AppError::InvalidInput(
                "No documents provided for ingestion".to_string(),
            ));
        }

        let _guard = self.ingest_lock.lock().await;

        let chunks = self.chunker.split(&documents);
        let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();

        let embeddings = tokio::time::timeout(
            self.provider_timeout,
            self.embedder.embed_texts(&texts),
        )
        .await
        .map_err(|_| {
            AppError::Embedding(format!(
                "Embedding request timed out after {}s",
                self.provider_timeout.as_secs()
            ))
        })??;

        let records: Vec<IndexRecord> = chunks
            .into_iter()
            .zip(embeddings)
            .map(|(chunk, vector)| {
                IndexRecord::new(
                    StoredChunk {
                        source: chunk.source,
                        position: chunk.position,
                        text: chunk.text,
                    },
                    vector,
                )
            })
            .collect();
        let count = records.len();

        match self.index.load_full() {
            Some(index) => {
                index.append(records)?;
                persistence::save_index(&self.index_path, &index).await?;
                info!(chunks = count, total = index.len(), "Appended to index");
            }
            None => {
                let dimensions = records
                    .first()
                    .map(|r| r.vector.len())
                    .unwrap_or_default();
                let index = Arc::new(VectorIndex::new(dimensions, DistanceMetric::Cosine)?);
                index.append(records)?;
                persistence::save_index(&self.index_path, &index).await?;
                self.index.store(Some(index));
                info!(chunks = count, dimensions, "Created index");
            }
        }

        Ok(count)
    }

    /// Answer a query against the current index.
    ///
    /// Embeds the query, retrieves the top-k chunks, and conditions the
    /// generation provider on them.
    #[instrument(skip(self, query))]
    pub async fn answer(&self, query: &str) -> Result<String> {
        let Some(index) = self.index.load_full() else {
            return Err(AppError::NoIndex(
                "Please ingest documents first".to_string(),
            ));
        };

        let query_vector = tokio::time::timeout(
            self.provider_timeout,
            self.embedder.embed_text(query),
        )
        .await
        .map_err(|_| {
            AppError::Embedding(format!(
                "Embedding request timed out after {}s",
                self.provider_timeout.as_secs()
            ))
        })??;

        let hits = index.search(&query_vector, self.retrieval_k)?;
        let context: Vec<&str> = hits.iter().map(|h| h.chunk.text.as_str()).collect();
        let prompt = format!(
            "Context:\n{}\n\nQuestion: {}",
            context.join("\n\n"),
            query
        );

        let answer = tokio::time::timeout(
            self.provider_timeout,
            self.llm.generate_with_system(ANSWER_SYSTEM_PROMPT, &prompt),
        )
        .await
        .map_err(|_| {
            AppError::Generation(format!(
                "Generation request timed out after {}s",
                self.provider_timeout.as_secs()
            ))
        })??;

        debug!(retrieved = hits.len(), model = self.llm.model_name(), "Generated answer");
        Ok(answer)
    }

    /// Current readiness. Pure read, never fails.
    pub fn status(&self) -> PipelineStatus {
        PipelineStatus {
            ready: self.index.load().is_some(),
        }
    }
}

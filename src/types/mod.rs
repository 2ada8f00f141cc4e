use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= API Request/Response Types =============

/// An uploaded file carried in-memory in the ingestion payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FilePayload {
    /// Original filename, used as the document's source identifier.
    pub filename: String,
    /// Full text content of the file.
    pub content: String,
}

/// Ingestion request: raw texts and/or uploaded files.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct IngestRequest {
    /// Raw text documents to ingest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texts: Option<Vec<String>>,
    /// Uploaded files to ingest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FilePayload>>,
}

/// Ingestion response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IngestResponse {
    /// Human-readable outcome message.
    pub message: String,
    /// Number of chunks added to the index.
    pub chunks: usize,
}

/// Query request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QueryRequest {
    /// The natural-language question.
    pub query: String,
}

/// Query response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QueryResponse {
    /// The generated answer.
    pub answer: String,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service liveness, always "ok".
    pub status: String,
    /// Whether a vector index is loaded and queryable.
    pub ready: bool,
}

// ============= RAG Types =============

/// A unit of input text with a source identifier.
///
/// Constructed uniformly whether the origin is raw text (synthetic
/// `text_input_{i}` label) or an uploaded file (filename). Exists only
/// during ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub source: String,
    pub text: String,
}

impl Document {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }
}

/// A bounded substring of a document, the atomic unit stored and retrieved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Source identifier of the originating document.
    pub source: String,
    /// Position of this chunk within its document (0-indexed).
    pub position: usize,
    /// The chunk text.
    pub text: String,
}

// ============= Error Types =============

/// Application-level error taxonomy.
///
/// Every pipeline operation surfaces one of these; the HTTP layer maps each
/// variant to a status code and a JSON body carrying the message and its
/// category (`bad-input`, `no-index`, `provider-failure`, `internal`).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("No index available: {0}")]
    NoIndex(String),

    #[error("Index error: {0}")]
    Index(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Machine-readable error category for API consumers.
    pub fn category(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "bad-input",
            AppError::Embedding(_) | AppError::Generation(_) => "provider-failure",
            AppError::NoIndex(_) => "no-index",
            AppError::Index(_) | AppError::Configuration(_) | AppError::Internal(_) => "internal",
        }
    }
}

impl From<quaero_index::Error> for AppError {
    fn from(err: quaero_index::Error) -> Self {
        AppError::Index(err.to_string())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let category = self.category();
        let status = match &self {
            AppError::InvalidInput(_) => axum::http::StatusCode::BAD_REQUEST,
            AppError::NoIndex(_) => axum::http::StatusCode::CONFLICT,
            AppError::Embedding(_) | AppError::Generation(_) => axum::http::StatusCode::BAD_GATEWAY,
            AppError::Index(_) | AppError::Configuration(_) | AppError::Internal(_) => {
                axum::http::StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = serde_json::json!({
            "error": self.to_string(),
            "category": category,
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

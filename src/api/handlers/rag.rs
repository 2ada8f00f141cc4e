//! Ingestion, query, and health handlers.
//!
//! A thin facade over [`RagPipeline`](crate::rag::pipeline::RagPipeline):
//! translates JSON payloads into pipeline calls and error categories into
//! HTTP status codes.

use crate::types::{
    AppError, Document, HealthResponse, IngestRequest, IngestResponse, QueryRequest,
    QueryResponse, Result,
};
use crate::AppState;
use axum::{extract::State, Json};
use std::time::Instant;

/// Ingest raw texts and uploaded files into the vector index.
#[utoipa::path(
    post,
    path = "/ingest",
    request_body = IngestRequest,
    responses(
        (status = 200, description = "Documents ingested successfully", body = IngestResponse),
        (status = 400, description = "No documents provided"),
        (status = 502, description = "Embedding provider failure"),
        (status = 500, description = "Internal server error")
    ),
    tag = "rag"
)]
pub async fn ingest(
    State(state): State<AppState>,
    Json(payload): Json<IngestRequest>,
) -> Result<Json<IngestResponse>> {
    let start = Instant::now();

    let mut documents = Vec::new();
    if let Some(texts) = &payload.texts {
        for (i, text) in texts.iter().enumerate() {
            documents.push(Document::new(format!("text_input_{}", i), text.clone()));
        }
    }
    if let Some(files) = &payload.files {
        for file in files {
            documents.push(Document::new(file.filename.clone(), file.content.clone()));
        }
    }

    if documents.is_empty() {
        return Err(AppError::InvalidInput(
            "No documents provided for ingestion".to_string(),
        ));
    }

    let document_count = documents.len();
    let chunks = state.pipeline.ingest(documents).await?;

    tracing::info!(
        documents = document_count,
        chunks,
        duration_ms = start.elapsed().as_millis() as u64,
        "Documents ingested"
    );

    Ok(Json(IngestResponse {
        message: "Ingestion successful".to_string(),
        chunks,
    }))
}

/// Answer a natural-language question against the ingested documents.
#[utoipa::path(
    post,
    path = "/query",
    request_body = QueryRequest,
    responses(
        (status = 200, description = "Answer generated", body = QueryResponse),
        (status = 400, description = "Blank query"),
        (status = 409, description = "No index yet; ingest documents first"),
        (status = 502, description = "Provider failure"),
        (status = 500, description = "Internal server error")
    ),
    tag = "rag"
)]
pub async fn query(
    State(state): State<AppState>,
    Json(payload): Json<QueryRequest>,
) -> Result<Json<QueryResponse>> {
    let start = Instant::now();

    if payload.query.trim().is_empty() {
        return Err(AppError::InvalidInput("Query required".to_string()));
    }

    let answer = state.pipeline.answer(&payload.query).await?;

    tracing::info!(
        duration_ms = start.elapsed().as_millis() as u64,
        "Query answered"
    );

    Ok(Json(QueryResponse { answer }))
}

/// Health check. Always succeeds; `ready` reports whether an index is
/// loaded and queryable.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health", body = HealthResponse)
    ),
    tag = "rag"
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let status = state.pipeline.status();
    Json(HealthResponse {
        status: "ok".to_string(),
        ready: status.ready,
    })
}

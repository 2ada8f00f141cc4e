//! REST API handlers and routes.

/// HTTP request handlers.
pub mod handlers;
/// Router construction.
pub mod routes;

use utoipa::OpenApi;

/// OpenAPI documentation for the service.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::rag::ingest,
        handlers::rag::query,
        handlers::rag::health,
    ),
    components(schemas(
        crate::types::IngestRequest,
        crate::types::IngestResponse,
        crate::types::FilePayload,
        crate::types::QueryRequest,
        crate::types::QueryResponse,
        crate::types::HealthResponse,
    )),
    tags(
        (name = "rag", description = "Retrieval-augmented question answering")
    )
)]
pub struct ApiDoc;

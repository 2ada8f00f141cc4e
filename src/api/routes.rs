use crate::api::ApiDoc;
use crate::AppState;
use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/ingest", post(crate::api::handlers::rag::ingest))
        .route("/query", post(crate::api::handlers::rag::query))
        .route("/health", get(crate::api::handlers::rag::health))
        .route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
}

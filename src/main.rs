use anyhow::Context;
use clap::Parser;
use quaero::{
    api::routes::create_router, llm::OpenAIClient, rag::embeddings::OpenAIEmbedder,
    rag::pipeline::{PipelineOptions, RagPipeline}, AppState, Config,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Maximum accepted request body (uploaded files travel in the JSON payload).
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Parser, Debug)]
#[command(
    name = "quaero-server",
    version,
    about = "Retrieval-augmented question-answering server"
)]
struct Args {
    /// Address to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Directory holding the persisted vector index (overrides QUAERO_INDEX_PATH)
    #[arg(long)]
    index_path: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quaero=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let mut config = Config::from_env()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(index_path) = args.index_path {
        config.rag.index_path = index_path;
    }

    let embedder = Arc::new(OpenAIEmbedder::new(
        config.providers.openai_api_key.clone(),
        config.providers.openai_api_base.clone(),
        config.providers.embedding_model.clone(),
    ));
    let llm = Arc::new(OpenAIClient::new(
        config.providers.openai_api_key.clone(),
        config.providers.openai_api_base.clone(),
        config.providers.chat_model.clone(),
    ));

    let pipeline = Arc::new(RagPipeline::new(embedder, llm, PipelineOptions::from(&config)));
    // The index load must complete (or definitively fail) before the
    // server accepts any requests.
    pipeline.init().await;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        config: Arc::new(config),
        pipeline,
    };

    let app = create_router()
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(%addr, "Quaero server listening");
    axum::serve(listener, app).await?;

    Ok(())
}

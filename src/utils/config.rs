use crate::types::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub providers: ProviderConfig,
    pub rag: RagConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    pub openai_api_key: String,
    pub openai_api_base: String,
    pub embedding_model: String,
    pub chat_model: String,
    /// Upper bound on any single embedding/generation call.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RagConfig {
    pub index_path: PathBuf,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub retrieval_k: usize,
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: parse_env("PORT", 8000)?,
            },
            providers: ProviderConfig {
                openai_api_key: env::var("OPENAI_API_KEY").map_err(|_| {
                    AppError::Configuration(
                        "OPENAI_API_KEY must be set in the environment".to_string(),
                    )
                })?,
                openai_api_base: env::var("OPENAI_API_BASE")
                    .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
                embedding_model: env::var("EMBEDDING_MODEL")
                    .unwrap_or_else(|_| "text-embedding-3-small".to_string()),
                chat_model: env::var("CHAT_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
                timeout_secs: parse_env("PROVIDER_TIMEOUT_SECS", 30)?,
            },
            rag: RagConfig {
                index_path: env::var("QUAERO_INDEX_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("data/index")),
                chunk_size: parse_env("CHUNK_SIZE", 1000)?,
                chunk_overlap: parse_env("CHUNK_OVERLAP", 200)?,
                retrieval_k: parse_env("RETRIEVAL_K", 4)?,
            },
        };

        if config.rag.chunk_overlap >= config.rag.chunk_size {
            return Err(AppError::Configuration(format!(
                "CHUNK_OVERLAP ({}) must be smaller than CHUNK_SIZE ({})",
                config.rag.chunk_overlap, config.rag.chunk_size
            )));
        }

        Ok(config)
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(value) => value.parse().map_err(|_| {
            AppError::Configuration(format!("{} has an invalid value: {:?}", name, value))
        }),
        Err(_) => Ok(default),
    }
}

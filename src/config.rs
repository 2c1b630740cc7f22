//! Configuration for the document Q&A service

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RagConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Embedding configuration
    pub embeddings: EmbeddingConfig,
    /// LLM configuration
    pub llm: LlmConfig,
    /// Chunking configuration
    pub chunking: ChunkingConfig,
    /// Retrieval configuration
    pub retrieval: RetrievalConfig,
    /// Storage paths
    pub storage: StorageConfig,
}

impl RagConfig {
    /// Build configuration from environment variables.
    ///
    /// Reads `.env` from the working directory first (dotenvy), then the process
    /// environment. `GEMINI_API_KEY` is required; everything else has defaults
    /// matching [`Default`].
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        config.llm.api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| Error::Config("GEMINI_API_KEY not found in environment".to_string()))?;

        if let Ok(model) = std::env::var("EMBEDDING_MODEL_NAME") {
            config.embeddings.model = model;
        }
        if let Ok(model) = std::env::var("LLM_MODEL_NAME") {
            config.llm.model = model;
        }
        if let Ok(dir) = std::env::var("UPLOAD_DIR") {
            config.storage.upload_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("INDEX_DIR") {
            config.storage.index_dir = PathBuf::from(dir);
        }
        if let Ok(host) = std::env::var("HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| Error::Config(format!("Invalid PORT value: {}", port)))?;
        }

        Ok(config)
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable permissive CORS
    pub enable_cors: bool,
    /// Maximum upload size in bytes
    pub max_upload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 7860,
            enable_cors: true,
            max_upload_size: 50 * 1024 * 1024, // 50MB
        }
    }
}

/// Embedding model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Gemini embedding model name
    pub model: String,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: "gemini-embedding-001".to_string(),
        }
    }
}

/// LLM configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Gemini API base URL
    pub base_url: String,
    /// Generation model name
    pub model: String,
    /// API key for the generative-AI provider
    #[serde(skip_serializing, default)]
    pub api_key: String,
    /// Temperature for generation
    pub temperature: f32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum output tokens per generation
    pub max_output_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash".to_string(),
            api_key: String::new(),
            temperature: 0.2,
            timeout_secs: 120,
            max_output_tokens: 2048,
        }
    }
}

/// Text chunking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Target chunk size in tokens (whitespace-delimited words)
    pub chunk_size: usize,
    /// Overlap between consecutive chunks in tokens
    pub chunk_overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 512,
            chunk_overlap: 20,
        }
    }
}

/// Retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Number of chunks to retrieve per question
    pub top_k: usize,
    /// Minimum cosine similarity for a chunk to be used
    pub min_score: f32,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            min_score: 0.0,
        }
    }
}

/// Storage paths for uploads and the persistent index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory where uploaded files are staged before ingestion
    pub upload_dir: PathBuf,
    /// Directory holding the persisted vector index
    pub index_dir: PathBuf,
    /// Replace an unreadable index with a fresh empty one instead of failing.
    /// Off by default: corruption loses all indexed data silently.
    pub reset_on_corrupt: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads"),
            index_dir: PathBuf::from("storage"),
            reset_on_corrupt: false,
        }
    }
}

//! Application state for the HTTP server

use std::sync::Arc;

use crate::config::RagConfig;
use crate::error::Result;
use crate::index::SharedIndex;
use crate::ingestion::IngestPipeline;
use crate::providers::{EmbeddingProvider, GeminiClient, LlmProvider};
use crate::retrieval::QueryPipeline;

/// Shared application state.
///
/// Providers and the index handle are built once here and passed explicitly;
/// there is no process-global configuration, so tests can run several
/// independent states side by side.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: RagConfig,
    index: SharedIndex,
    embedder: Arc<dyn EmbeddingProvider>,
    llm: Arc<dyn LlmProvider>,
}

impl AppState {
    /// Create application state with the Gemini client from config
    pub fn new(config: RagConfig) -> Result<Self> {
        let gemini = Arc::new(GeminiClient::new(&config.llm, &config.embeddings)?);
        tracing::info!(
            embed_model = %config.embeddings.model,
            llm_model = %config.llm.model,
            "Gemini client initialized"
        );

        Self::with_providers(config, gemini.clone(), gemini)
    }

    /// Create application state with explicit providers (used by tests)
    pub fn with_providers(
        config: RagConfig,
        embedder: Arc<dyn EmbeddingProvider>,
        llm: Arc<dyn LlmProvider>,
    ) -> Result<Self> {
        let index = SharedIndex::open(&config.storage)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                index,
                embedder,
                llm,
            }),
        })
    }

    /// Get configuration
    pub fn config(&self) -> &RagConfig {
        &self.inner.config
    }

    /// Get the shared vector index
    pub fn index(&self) -> &SharedIndex {
        &self.inner.index
    }

    /// Get the LLM provider
    pub fn llm(&self) -> &Arc<dyn LlmProvider> {
        &self.inner.llm
    }

    /// Build an ingestion pipeline bound to this state's providers
    pub fn ingest_pipeline(&self) -> IngestPipeline {
        IngestPipeline::new(&self.inner.config.chunking, self.inner.embedder.clone())
    }

    /// Build a query pipeline bound to this state's providers
    pub fn query_pipeline(&self) -> QueryPipeline {
        QueryPipeline::new(
            &self.inner.config.retrieval,
            self.inner.embedder.clone(),
            self.inner.llm.clone(),
        )
    }
}

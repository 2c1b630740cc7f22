//! Query pipeline: embed the question, retrieve chunks, generate an answer

use std::sync::Arc;

use crate::config::RetrievalConfig;
use crate::error::{Error, Result};
use crate::generation::{PromptBuilder, NO_INFORMATION_ANSWER};
use crate::index::SharedIndex;
use crate::providers::{EmbeddingProvider, LlmProvider};
use crate::types::response::{AskResponse, SourceRef};

/// Query pipeline with explicit dependencies
pub struct QueryPipeline {
    embedder: Arc<dyn EmbeddingProvider>,
    llm: Arc<dyn LlmProvider>,
    top_k: usize,
    min_score: f32,
}

impl QueryPipeline {
    /// Create a pipeline from retrieval config and providers
    pub fn new(
        retrieval: &RetrievalConfig,
        embedder: Arc<dyn EmbeddingProvider>,
        llm: Arc<dyn LlmProvider>,
    ) -> Self {
        Self {
            embedder,
            llm,
            top_k: retrieval.top_k,
            min_score: retrieval.min_score,
        }
    }

    /// Answer a question grounded in the indexed documents.
    ///
    /// An empty index (or no retrieval hits) yields a fixed no-information
    /// answer with an empty source list rather than an error.
    pub async fn answer(&self, index: &SharedIndex, question: &str) -> Result<AskResponse> {
        let question = question.trim();
        if question.is_empty() {
            return Err(Error::InvalidRequest("No question provided".to_string()));
        }

        tracing::info!(question = %question, "answering question");

        let query_embedding = self.embedder.embed(question).await?;
        let results = index.search(&query_embedding, self.top_k, self.min_score);

        if results.is_empty() {
            tracing::info!("no relevant chunks retrieved");
            return Ok(AskResponse {
                answer: NO_INFORMATION_ANSWER.to_string(),
                sources: Vec::new(),
            });
        }

        let context = PromptBuilder::build_context(&results);
        let answer = self.llm.generate_answer(question, &context).await?;

        let sources = results.iter().map(|r| SourceRef::from_chunk(&r.chunk)).collect();

        Ok(AskResponse { answer, sources })
    }
}

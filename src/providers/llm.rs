//! LLM provider trait for answer generation and rewriting

use async_trait::async_trait;

use crate::error::Result;

/// Trait for LLM-based text generation
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate an answer to a question grounded in retrieved context
    async fn generate_answer(&self, question: &str, context: &str) -> Result<String>;

    /// Restyle an existing answer without re-retrieving sources
    async fn rewrite(&self, answer: &str, style: &str) -> Result<String>;

    /// Get provider name for logging
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;
}

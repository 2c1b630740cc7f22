//! Shared fixtures for integration tests: mock providers and small configs

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

use docqa::config::RagConfig;
use docqa::error::Result;
use docqa::providers::{EmbeddingProvider, LlmProvider};
use docqa::server::state::AppState;

/// Deterministic embedder: maps text to a small non-zero feature vector
pub struct MockEmbedder;

#[async_trait]
impl EmbeddingProvider for MockEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let words = text.split_whitespace().count() as f32;
        let letters = text.chars().filter(|c| c.is_alphabetic()).count() as f32;
        let vowels = text
            .chars()
            .filter(|c| "aeiouAEIOU".contains(*c))
            .count() as f32;
        Ok(vec![1.0 + words, 1.0 + letters, 1.0 + vowels, 1.0])
    }

    fn name(&self) -> &str {
        "mock-embedder"
    }

    fn model(&self) -> &str {
        "mock"
    }
}

/// Canned LLM: echoes enough of its inputs to assert grounding
pub struct MockLlm;

#[async_trait]
impl LlmProvider for MockLlm {
    async fn generate_answer(&self, question: &str, context: &str) -> Result<String> {
        assert!(!context.is_empty(), "generation must receive context");
        Ok(format!("Answer to '{}' based on the documents.", question))
    }

    async fn rewrite(&self, answer: &str, style: &str) -> Result<String> {
        Ok(format!("In a {} register: {}", style, answer))
    }

    fn name(&self) -> &str {
        "mock-llm"
    }

    fn model(&self) -> &str {
        "mock"
    }
}

pub fn test_config(root: &Path) -> RagConfig {
    let mut config = RagConfig::default();
    config.storage.upload_dir = root.join("uploads");
    config.storage.index_dir = root.join("storage");
    // Small chunks so short fixtures produce several of them.
    config.chunking.chunk_size = 16;
    config.chunking.chunk_overlap = 4;
    config
}

pub fn test_state(root: &Path) -> AppState {
    AppState::with_providers(test_config(root), Arc::new(MockEmbedder), Arc::new(MockLlm))
        .expect("state should build")
}

pub const FIXTURE: &str =
    "The quarterly report covers revenue growth. Sales rose by twelve percent. \
     The new product line exceeded projections. Customer retention stayed strong \
     through the period. The board approved further investment in research.";

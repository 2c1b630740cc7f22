//! Provider abstractions for embeddings and answer generation
//!
//! Trait seams keep the pipelines independent of the hosted API, so tests can
//! run against in-process fakes.

pub mod embedding;
pub mod gemini;
pub mod llm;

pub use embedding::EmbeddingProvider;
pub use gemini::GeminiClient;
pub use llm::LlmProvider;

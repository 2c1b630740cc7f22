//! docqa: document question-answering over a persistent vector index
//!
//! Upload PDF or plain-text files, index them as embedded chunks, and answer
//! natural-language questions with an LLM grounded in the retrieved chunks.
//! Embeddings and generation go through the Google Gemini API; the index is a
//! flat cosine-similarity store persisted to a directory on disk.

pub mod config;
pub mod error;
pub mod generation;
pub mod index;
pub mod ingestion;
pub mod providers;
pub mod retrieval;
pub mod server;
pub mod types;

pub use config::RagConfig;
pub use error::{Error, Result};
pub use index::SharedIndex;
pub use types::{
    document::{Chunk, ChunkSource, Document, FileType},
    query::{AskRequest, RewriteRequest},
    response::{AskResponse, RewriteResponse, SourceRef, UploadResponse},
};

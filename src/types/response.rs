//! Response types for the HTTP API

use serde::{Deserialize, Serialize};

use crate::types::Chunk;

/// Response body for `POST /upload`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Human-readable status message
    pub message: String,
    /// Number of top-level documents indexed from the upload.
    ///
    /// The field name is a historical wire-format quirk: it counts documents,
    /// not chunks. One uploaded file yields one document.
    pub chunks_indexed: u32,
}

/// A source reference attached to an answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRef {
    /// Source metadata
    pub metadata: SourceMetadata,
}

/// Metadata identifying where an answer chunk came from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// Filename of the source document
    pub filename: String,
    /// Ordinal of the chunk within the document
    pub chunk_index: u32,
}

impl SourceRef {
    /// Build a source reference from a retrieved chunk
    pub fn from_chunk(chunk: &Chunk) -> Self {
        Self {
            metadata: SourceMetadata {
                filename: chunk.source.filename.clone(),
                chunk_index: chunk.chunk_index,
            },
        }
    }
}

/// Response body for `POST /ask`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    /// Generated answer text
    pub answer: String,
    /// Chunks the answer was grounded in
    pub sources: Vec<SourceRef>,
}

/// Response body for `POST /rewrite`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteResponse {
    /// The answer as submitted
    pub original_answer: String,
    /// The requested style
    pub style_request: String,
    /// The restyled answer
    pub new_answer: String,
}

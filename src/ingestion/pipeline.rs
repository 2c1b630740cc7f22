//! Ingestion pipeline: parse a file, chunk it, embed, and index

use std::path::Path;
use std::sync::Arc;

use crate::config::ChunkingConfig;
use crate::error::{Error, Result};
use crate::index::SharedIndex;
use crate::ingestion::{FileParser, TextChunker};
use crate::providers::EmbeddingProvider;
use crate::types::Document;

/// Outcome of ingesting one upload
#[derive(Debug, Clone, Copy)]
pub struct IngestOutcome {
    /// Top-level documents processed (one per uploaded file)
    pub documents_indexed: u32,
    /// Chunks embedded and inserted into the index
    pub chunks_created: u32,
}

/// Ingestion pipeline with explicit dependencies
pub struct IngestPipeline {
    chunker: TextChunker,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl IngestPipeline {
    /// Create a pipeline from chunking config and an embedding provider
    pub fn new(chunking: &ChunkingConfig, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            chunker: TextChunker::new(chunking.chunk_size, chunking.chunk_overlap),
            embedder,
        }
    }

    /// Ingest a file from disk into the index.
    ///
    /// Parses, chunks, embeds, inserts, and persists. Any failure aborts the
    /// operation; chunks inserted before the failure are not rolled back.
    pub async fn ingest_path(&self, index: &SharedIndex, path: &Path) -> Result<IngestOutcome> {
        let parsed = FileParser::parse_path(path)?;
        let doc = Document::new(parsed.filename.clone(), parsed.file_type);

        let chunks = self.chunker.chunk_document(&doc, &parsed.content);
        let chunk_count = chunks.len() as u32;

        if chunks.is_empty() {
            tracing::warn!("file {} produced no chunks", parsed.filename);
            return Ok(IngestOutcome {
                documents_indexed: 1,
                chunks_created: 0,
            });
        }

        let texts: Vec<String> = chunks.iter().map(|c| c.content.clone()).collect();
        let embeddings = self.embedder.embed_batch(&texts).await?;
        if embeddings.len() != chunks.len() {
            return Err(Error::embedding(format!(
                "provider returned {} embeddings for {} chunks",
                embeddings.len(),
                chunks.len()
            )));
        }

        index.insert_chunks(chunks.into_iter().zip(embeddings).collect())?;

        tracing::info!(
            filename = %parsed.filename,
            chunks = chunk_count,
            "document ingested"
        );

        Ok(IngestOutcome {
            documents_indexed: 1,
            chunks_created: chunk_count,
        })
    }

    /// Ingest an uploaded file, deleting it afterwards whether or not
    /// ingestion succeeded. Uploads are staged on disk only transiently.
    pub async fn ingest_upload(&self, index: &SharedIndex, path: &Path) -> Result<IngestOutcome> {
        let result = self.ingest_path(index, path).await;

        if path.exists() {
            if let Err(e) = std::fs::remove_file(path) {
                tracing::warn!(path = %path.display(), error = %e, "failed to remove upload");
            }
        }

        result
    }
}

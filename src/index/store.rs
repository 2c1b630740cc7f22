//! On-disk representation and search for the flat vector index

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::Chunk;

const META_FILE: &str = "meta.json";
const CHUNKS_FILE: &str = "chunks.json";
const FORMAT_VERSION: u32 = 1;

/// A chunk paired with its embedding, as stored in the index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexedChunk {
    /// The chunk with its metadata
    pub chunk: Chunk,
    /// Embedding vector
    pub embedding: Vec<f32>,
}

/// A search hit with its similarity score
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The retrieved chunk
    pub chunk: Chunk,
    /// Cosine similarity to the query (higher is more similar)
    pub similarity: f32,
}

/// Index directory metadata
#[derive(Debug, Serialize, Deserialize)]
struct IndexMeta {
    version: u32,
    dimensions: usize,
    chunk_count: usize,
}

/// Flat in-memory vector index
#[derive(Debug, Default)]
pub struct VectorIndex {
    entries: Vec<IndexedChunk>,
    dimensions: usize,
}

impl VectorIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the index from a directory.
    ///
    /// A directory without a `meta.json` (missing, or never written to) counts
    /// as a fresh empty index. Anything present but unreadable is an error.
    pub fn load(dir: &Path) -> Result<Self> {
        let meta_path = dir.join(META_FILE);
        if !meta_path.exists() {
            return Ok(Self::new());
        }

        let meta_raw = fs::read_to_string(&meta_path)?;
        let meta: IndexMeta = serde_json::from_str(&meta_raw)
            .map_err(|e| Error::index(format!("invalid {}: {}", META_FILE, e)))?;
        if meta.version != FORMAT_VERSION {
            return Err(Error::index(format!(
                "unsupported index format version {}",
                meta.version
            )));
        }

        let chunks_raw = fs::read_to_string(dir.join(CHUNKS_FILE))?;
        let entries: Vec<IndexedChunk> = serde_json::from_str(&chunks_raw)
            .map_err(|e| Error::index(format!("invalid {}: {}", CHUNKS_FILE, e)))?;

        if entries.len() != meta.chunk_count {
            return Err(Error::index(format!(
                "chunk count mismatch: meta says {}, found {}",
                meta.chunk_count,
                entries.len()
            )));
        }

        Ok(Self {
            dimensions: meta.dimensions,
            entries,
        })
    }

    /// Persist the index to a directory, overwriting previous contents
    pub fn persist(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;

        let meta = IndexMeta {
            version: FORMAT_VERSION,
            dimensions: self.dimensions,
            chunk_count: self.entries.len(),
        };

        fs::write(dir.join(META_FILE), serde_json::to_string_pretty(&meta)?)?;
        fs::write(dir.join(CHUNKS_FILE), serde_json::to_string(&self.entries)?)?;

        Ok(())
    }

    /// Insert a chunk with its embedding
    pub fn insert(&mut self, chunk: Chunk, embedding: Vec<f32>) -> Result<()> {
        if embedding.is_empty() {
            return Err(Error::index("chunk has an empty embedding"));
        }
        if self.dimensions == 0 {
            self.dimensions = embedding.len();
        } else if embedding.len() != self.dimensions {
            return Err(Error::index(format!(
                "embedding dimension mismatch: index has {}, got {}",
                self.dimensions,
                embedding.len()
            )));
        }

        self.entries.push(IndexedChunk { chunk, embedding });
        Ok(())
    }

    /// Insert a batch of chunks, all or nothing.
    ///
    /// Every embedding is validated before anything is added, so a bad batch
    /// leaves the index exactly as it was.
    pub fn insert_batch(&mut self, chunks: Vec<(Chunk, Vec<f32>)>) -> Result<()> {
        let mut dimensions = self.dimensions;
        for (_, embedding) in &chunks {
            if embedding.is_empty() {
                return Err(Error::index("chunk has an empty embedding"));
            }
            if dimensions == 0 {
                dimensions = embedding.len();
            } else if embedding.len() != dimensions {
                return Err(Error::index(format!(
                    "embedding dimension mismatch: index has {}, got {}",
                    dimensions,
                    embedding.len()
                )));
            }
        }

        self.dimensions = dimensions;
        self.entries.extend(
            chunks
                .into_iter()
                .map(|(chunk, embedding)| IndexedChunk { chunk, embedding }),
        );
        Ok(())
    }

    /// Return the `top_k` chunks most similar to the query, best first
    pub fn search(&self, query: &[f32], top_k: usize, min_score: f32) -> Vec<SearchResult> {
        let mut results: Vec<SearchResult> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let similarity = cosine_similarity(query, &entry.embedding)?;
                (similarity >= min_score).then(|| SearchResult {
                    chunk: entry.chunk.clone(),
                    similarity,
                })
            })
            .collect();

        results.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(top_k);
        results
    }

    /// Number of chunks stored
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index has no chunks
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cosine similarity between two vectors; None for mismatched or zero vectors
fn cosine_similarity(a: &[f32], b: &[f32]) -> Option<f32> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        return None;
    }
    Some(dot / denom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChunkSource, FileType};
    use uuid::Uuid;

    fn chunk(content: &str) -> Chunk {
        Chunk::new(
            Uuid::new_v4(),
            content.to_string(),
            ChunkSource {
                filename: "doc.txt".to_string(),
                file_type: FileType::Txt,
            },
            0,
        )
    }

    #[test]
    fn cosine_identity_and_orthogonal() {
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]).unwrap() - 1.0).abs() < 1e-6);
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap().abs() < 1e-6);
        assert!(cosine_similarity(&[1.0], &[1.0, 0.0]).is_none());
        assert!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]).is_none());
    }

    #[test]
    fn search_orders_by_similarity() {
        let mut index = VectorIndex::new();
        index.insert(chunk("east"), vec![1.0, 0.0]).unwrap();
        index.insert(chunk("north"), vec![0.0, 1.0]).unwrap();
        index.insert(chunk("northeast"), vec![0.7, 0.7]).unwrap();

        let results = index.search(&[1.0, 0.2], 2, 0.0);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].chunk.content, "east");
        assert_eq!(results[1].chunk.content, "northeast");
        assert!(results[0].similarity >= results[1].similarity);
    }

    #[test]
    fn min_score_filters_hits() {
        let mut index = VectorIndex::new();
        index.insert(chunk("east"), vec![1.0, 0.0]).unwrap();
        index.insert(chunk("north"), vec![0.0, 1.0]).unwrap();

        let results = index.search(&[1.0, 0.0], 10, 0.5);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].chunk.content, "east");
    }

    #[test]
    fn rejects_dimension_mismatch() {
        let mut index = VectorIndex::new();
        index.insert(chunk("a"), vec![1.0, 0.0]).unwrap();
        assert!(index.insert(chunk("b"), vec![1.0, 0.0, 0.0]).is_err());
        assert!(index.insert(chunk("c"), vec![]).is_err());
    }

    #[test]
    fn bad_batch_inserts_nothing() {
        let mut index = VectorIndex::new();
        index.insert(chunk("seed"), vec![1.0, 0.0]).unwrap();

        let result = index.insert_batch(vec![
            (chunk("fits"), vec![0.0, 1.0]),
            (chunk("wrong dims"), vec![1.0, 0.0, 0.0]),
        ]);

        assert!(result.is_err());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn search_empty_index_returns_nothing() {
        let index = VectorIndex::new();
        assert!(index.search(&[1.0, 0.0], 5, 0.0).is_empty());
    }

    #[test]
    fn load_rejects_count_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let mut index = VectorIndex::new();
        index.insert(chunk("a"), vec![1.0]).unwrap();
        index.persist(dir.path()).unwrap();

        // Truncate the chunk file behind the meta file's back
        std::fs::write(dir.path().join(CHUNKS_FILE), "[]").unwrap();
        assert!(VectorIndex::load(dir.path()).is_err());
    }
}

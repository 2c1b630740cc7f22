//! Persistent flat vector index with cosine similarity search
//!
//! The index is the aggregate of every chunk's embedding plus metadata,
//! persisted as a directory of files (`meta.json` + `chunks.json`). Insertion
//! writes through to disk; search scans all vectors. No per-chunk update or
//! delete, and no deduplication.

mod store;

pub use store::{IndexedChunk, SearchResult, VectorIndex};

use parking_lot::RwLock;
use std::path::{Path, PathBuf};

use crate::config::StorageConfig;
use crate::error::Result;
use crate::types::Chunk;

/// Long-lived handle to the vector index, shared across requests.
///
/// The index loads once at startup and stays resident; queries take a read
/// lock, insertions take a write lock and persist to disk before releasing it.
/// This replaces a per-request load/persist cycle, so concurrent ingestions
/// can no longer lose each other's writes.
pub struct SharedIndex {
    inner: RwLock<VectorIndex>,
    dir: PathBuf,
}

impl SharedIndex {
    /// Open the index persisted under `storage.index_dir`.
    ///
    /// A missing or empty directory yields a fresh empty index. Existing but
    /// unreadable data is an error unless `storage.reset_on_corrupt` is set,
    /// in which case the index is replaced with an empty one and the prior
    /// contents are lost.
    pub fn open(storage: &StorageConfig) -> Result<Self> {
        let index = match VectorIndex::load(&storage.index_dir) {
            Ok(index) => index,
            Err(e) if storage.reset_on_corrupt => {
                tracing::error!(
                    error = %e,
                    dir = %storage.index_dir.display(),
                    "index unreadable, resetting to empty (previous data lost)"
                );
                VectorIndex::new()
            }
            Err(e) => return Err(e),
        };

        tracing::info!(
            chunks = index.len(),
            dir = %storage.index_dir.display(),
            "vector index loaded"
        );

        Ok(Self {
            inner: RwLock::new(index),
            dir: storage.index_dir.clone(),
        })
    }

    /// Create an in-memory index persisted under `dir` (starts empty)
    pub fn empty(dir: &Path) -> Self {
        Self {
            inner: RwLock::new(VectorIndex::new()),
            dir: dir.to_path_buf(),
        }
    }

    /// Insert embedded chunks and persist the index.
    ///
    /// The batch is validated up front, so a rejected batch leaves both the
    /// resident index and the on-disk copy untouched.
    pub fn insert_chunks(&self, chunks: Vec<(Chunk, Vec<f32>)>) -> Result<()> {
        let mut index = self.inner.write();
        index.insert_batch(chunks)?;
        index.persist(&self.dir)
    }

    /// Search for the chunks most similar to the query embedding
    pub fn search(&self, query: &[f32], top_k: usize, min_score: f32) -> Vec<SearchResult> {
        self.inner.read().search(query, top_k, min_score)
    }

    /// Number of chunks in the index
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if the index has no chunks
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChunkSource, FileType};
    use uuid::Uuid;

    fn chunk(content: &str, index: u32) -> Chunk {
        Chunk::new(
            Uuid::new_v4(),
            content.to_string(),
            ChunkSource {
                filename: "test.txt".to_string(),
                file_type: FileType::Txt,
            },
            index,
        )
    }

    #[test]
    fn open_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageConfig {
            index_dir: dir.path().join("does-not-exist"),
            ..Default::default()
        };
        let index = SharedIndex::open(&storage).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn insert_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageConfig {
            index_dir: dir.path().to_path_buf(),
            ..Default::default()
        };

        let index = SharedIndex::open(&storage).unwrap();
        index
            .insert_chunks(vec![
                (chunk("alpha", 0), vec![1.0, 0.0]),
                (chunk("beta", 1), vec![0.0, 1.0]),
            ])
            .unwrap();
        assert_eq!(index.len(), 2);

        let reloaded = SharedIndex::open(&storage).unwrap();
        assert_eq!(reloaded.len(), 2);

        let results = reloaded.search(&[1.0, 0.1], 1, 0.0);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].chunk.content, "alpha");
    }

    #[test]
    fn corrupt_index_fails_loudly_by_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("meta.json"), "{not json").unwrap();

        let storage = StorageConfig {
            index_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        assert!(SharedIndex::open(&storage).is_err());

        let storage = StorageConfig {
            reset_on_corrupt: true,
            index_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let index = SharedIndex::open(&storage).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn failed_batch_leaves_index_and_disk_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageConfig {
            index_dir: dir.path().to_path_buf(),
            ..Default::default()
        };

        let index = SharedIndex::open(&storage).unwrap();
        index
            .insert_chunks(vec![(chunk("good", 0), vec![1.0, 0.0])])
            .unwrap();

        let result = index.insert_chunks(vec![
            (chunk("fits", 1), vec![0.0, 1.0]),
            (chunk("bad dims", 2), vec![1.0, 0.0, 0.0]),
        ]);
        assert!(result.is_err());
        assert_eq!(index.len(), 1, "failed batch must not leave partial chunks");

        // A later successful insert must not persist anything from the failure.
        index
            .insert_chunks(vec![(chunk("later", 3), vec![0.5, 0.5])])
            .unwrap();
        let reloaded = SharedIndex::open(&storage).unwrap();
        assert_eq!(reloaded.len(), 2);
    }

    #[test]
    fn reingestion_doubles_chunk_count() {
        let dir = tempfile::tempdir().unwrap();
        let index = SharedIndex::empty(dir.path());

        index
            .insert_chunks(vec![(chunk("same text", 0), vec![0.5, 0.5])])
            .unwrap();
        index
            .insert_chunks(vec![(chunk("same text", 0), vec![0.5, 0.5])])
            .unwrap();

        assert_eq!(index.len(), 2);
    }
}

//! Document and chunk types with source tracking

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Supported file types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// PDF document
    Pdf,
    /// Plain text file
    Txt,
    /// Unknown file type (rejected at upload)
    Unknown,
}

impl FileType {
    /// Detect file type from extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "txt" => Self::Txt,
            _ => Self::Unknown,
        }
    }

    /// Detect file type from a filename
    pub fn from_filename(filename: &str) -> Self {
        filename
            .rsplit_once('.')
            .map(|(_, ext)| Self::from_extension(ext))
            .unwrap_or(Self::Unknown)
    }

    /// Check if this is a supported file type
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// A document that has been ingested
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique document ID
    pub id: Uuid,
    /// Source filename as uploaded
    pub filename: String,
    /// File type
    pub file_type: FileType,
    /// Number of chunks created from this document
    pub total_chunks: u32,
    /// Ingestion timestamp
    pub ingested_at: chrono::DateTime<chrono::Utc>,
}

impl Document {
    /// Create a new document
    pub fn new(filename: String, file_type: FileType) -> Self {
        Self {
            id: Uuid::new_v4(),
            filename,
            file_type,
            total_chunks: 0,
            ingested_at: chrono::Utc::now(),
        }
    }
}

/// Source information carried by each chunk, used for answer citations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkSource {
    /// Filename the chunk came from
    pub filename: String,
    /// File type
    pub file_type: FileType,
}

/// A chunk of text from a document, the unit of embedding and retrieval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Unique chunk ID
    pub id: Uuid,
    /// Parent document ID
    pub document_id: Uuid,
    /// Text content
    pub content: String,
    /// Source information for citations
    pub source: ChunkSource,
    /// Ordinal of this chunk within its document (0-based)
    pub chunk_index: u32,
}

impl Chunk {
    /// Create a new chunk
    pub fn new(document_id: Uuid, content: String, source: ChunkSource, chunk_index: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            document_id,
            content,
            source,
            chunk_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_type_from_extension() {
        assert_eq!(FileType::from_extension("pdf"), FileType::Pdf);
        assert_eq!(FileType::from_extension("PDF"), FileType::Pdf);
        assert_eq!(FileType::from_extension("txt"), FileType::Txt);
        assert_eq!(FileType::from_extension("exe"), FileType::Unknown);
        assert!(!FileType::from_extension("exe").is_supported());
    }

    #[test]
    fn file_type_from_filename() {
        assert_eq!(FileType::from_filename("report.pdf"), FileType::Pdf);
        assert_eq!(FileType::from_filename("notes.v2.TXT"), FileType::Txt);
        assert_eq!(FileType::from_filename("no_extension"), FileType::Unknown);
    }
}

//! File parsing for supported upload formats (PDF, plain text)

use std::path::Path;

use crate::error::{Error, Result};
use crate::types::FileType;

/// Parsed document with extracted text
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// Source filename
    pub filename: String,
    /// File type
    pub file_type: FileType,
    /// Extracted text content
    pub content: String,
}

/// Parser dispatching on file extension
pub struct FileParser;

impl FileParser {
    /// Parse a file from disk
    pub fn parse_path(path: &Path) -> Result<ParsedDocument> {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::InvalidRequest(format!("Invalid path: {}", path.display())))?
            .to_string();

        let data = std::fs::read(path)
            .map_err(|e| Error::file_parse(&filename, format!("read failed: {}", e)))?;

        Self::parse_bytes(&filename, &data)
    }

    /// Parse raw file bytes based on the filename's extension
    pub fn parse_bytes(filename: &str, data: &[u8]) -> Result<ParsedDocument> {
        let file_type = FileType::from_filename(filename);

        let content = match file_type {
            FileType::Pdf => Self::extract_pdf(filename, data)?,
            FileType::Txt => Self::extract_text(filename, data),
            FileType::Unknown => {
                let ext = filename.rsplit('.').next().unwrap_or(filename);
                return Err(Error::UnsupportedFileType(ext.to_string()));
            }
        };

        Ok(ParsedDocument {
            filename: filename.to_string(),
            file_type,
            content,
        })
    }

    /// Extract text from a PDF
    fn extract_pdf(filename: &str, data: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(data)
            .map_err(|e| Error::file_parse(filename, format!("PDF extraction failed: {}", e)))
    }

    /// Decode plain text, falling back to lossy UTF-8 for invalid bytes
    fn extract_text(filename: &str, data: &[u8]) -> String {
        match std::str::from_utf8(data) {
            Ok(text) => text.to_string(),
            Err(_) => {
                tracing::warn!("file {} is not valid UTF-8, decoding lossily", filename);
                String::from_utf8_lossy(data).into_owned()
            }
        }
    }
}

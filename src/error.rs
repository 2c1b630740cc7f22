//! Error types for the document Q&A service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, Error>;

/// Service errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid client request (missing file, empty question, ...)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Unsupported file type
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// File parsing error
    #[error("Failed to parse file '{filename}': {message}")]
    FileParse { filename: String, message: String },

    /// Embedding error
    #[error("Embedding generation failed: {0}")]
    Embedding(String),

    /// LLM error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Vector index error
    #[error("Vector index error: {0}")]
    Index(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a file parse error
    pub fn file_parse(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FileParse {
            filename: filename.into(),
            message: message.into(),
        }
    }

    /// Create an embedding error
    pub fn embedding(message: impl Into<String>) -> Self {
        Self::Embedding(message.into())
    }

    /// Create an LLM error
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm(message.into())
    }

    /// Create a vector index error
    pub fn index(message: impl Into<String>) -> Self {
        Self::Index(message.into())
    }

    /// True for errors caused by the client's input (mapped to 400)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_) | Self::UnsupportedFileType(_))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Client errors carry their message; everything else is logged in full
        // and answered with a generic message only.
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let message = match &self {
            Error::InvalidRequest(msg) => msg.clone(),
            Error::UnsupportedFileType(ext) => format!("File type not allowed: {}", ext),
            Error::FileParse { filename, .. } => {
                tracing::error!(error = %self, "indexing failed for file {}", filename);
                "Indexing failed due to an internal server issue.".to_string()
            }
            Error::Embedding(_) | Error::Llm(_) | Error::Http(_) => {
                tracing::error!(error = %self, "provider call failed");
                "Failed to process request due to an internal server issue.".to_string()
            }
            _ => {
                tracing::error!(error = %self, "internal server error");
                "An unexpected server error occurred. Please try again later.".to_string()
            }
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

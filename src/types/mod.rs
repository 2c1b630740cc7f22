//! Shared data types

pub mod document;
pub mod query;
pub mod response;

pub use document::{Chunk, ChunkSource, Document, FileType};
pub use query::{AskRequest, RewriteRequest};
pub use response::{AskResponse, RewriteResponse, SourceRef, UploadResponse};

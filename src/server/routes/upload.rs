//! File upload and ingestion endpoint

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::{response::UploadResponse, FileType};

/// POST /upload - Upload and index a document
///
/// Expects a multipart form with a `file` field. Allowed extensions: pdf, txt.
/// The uploaded file is staged under the configured upload directory and
/// deleted after ingestion, whether it succeeded or not.
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::InvalidRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().map(|s| s.to_string()).unwrap_or_default();
        let data = field
            .bytes()
            .await
            .map_err(|e| Error::InvalidRequest(format!("Failed to read file: {}", e)))?;
        file = Some((filename, data.to_vec()));
        break;
    }

    let (filename, data) = file.ok_or_else(|| Error::InvalidRequest("No file part".to_string()))?;
    if filename.is_empty() {
        return Err(Error::InvalidRequest("No selected file".to_string()));
    }

    let filename = sanitize_filename(&filename);
    if !FileType::from_filename(&filename).is_supported() {
        let ext = filename.rsplit('.').next().unwrap_or(filename.as_str());
        return Err(Error::UnsupportedFileType(ext.to_string()));
    }

    tracing::info!(filename = %filename, bytes = data.len(), "processing upload");

    let upload_dir = &state.config().storage.upload_dir;
    tokio::fs::create_dir_all(upload_dir).await?;
    let path = upload_dir.join(&filename);
    tokio::fs::write(&path, &data).await?;

    let outcome = state
        .ingest_pipeline()
        .ingest_upload(state.index(), &path)
        .await?;

    Ok(Json(UploadResponse {
        message: "File processed successfully".to_string(),
        // Wire-format quirk: this counts documents, not chunks.
        chunks_indexed: outcome.documents_indexed,
    }))
}

/// Reduce an uploaded filename to a safe basename.
///
/// Strips any path components and replaces characters outside
/// `[A-Za-z0-9._-]` with underscores.
fn sanitize_filename(name: &str) -> String {
    let basename = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(name);

    basename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

//! `POST /api/upload` — extract the text layer from an uploaded PDF.
//!
//! The file is staged in the upload directory, parsed on the blocking
//! pool, and removed again before the response is sent.

use axum::extract::{Multipart, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, UploadResponse};
use crate::extraction::{extract_pdf_text, has_pdf_extension, sanitize_filename, StagedUpload};

const FILE_FIELD: &str = "file";

pub async fn upload(
    State(ctx): State<ApiContext>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut file = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        file = Some((filename, bytes));
        break;
    }

    let (filename, bytes) = file.ok_or_else(|| ApiError::BadRequest("No file provided".into()))?;

    if filename.is_empty() {
        return Err(ApiError::BadRequest("No file selected".into()));
    }
    if !has_pdf_extension(&filename) {
        return Err(ApiError::BadRequest("Only PDF files are supported".into()));
    }

    let safe_filename = sanitize_filename(&filename);
    tracing::info!(
        filename = %safe_filename,
        size = bytes.len(),
        "PDF upload received"
    );

    let upload_dir = ctx.config.upload_dir.clone();
    let extractor = ctx.extractor.clone();
    let staged_name = safe_filename.clone();

    let text = tokio::task::spawn_blocking(move || {
        let staged = StagedUpload::write(&upload_dir, &staged_name, &bytes)?;
        extract_pdf_text(extractor.as_ref(), staged.path())
    })
    .await??;

    Ok(Json(UploadResponse {
        filename: safe_filename,
        length: text.chars().count(),
        text,
    }))
}

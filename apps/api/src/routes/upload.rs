use anyhow::Context;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::state::AppState;
use crate::storage::{allowed_file, save_upload};

const FILE_FIELD: &str = "file";

/// POST /upload
///
/// Accepts a multipart form with a `file` part holding a PDF resume and
/// responds with the fields parsed out of it.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ResumeRecord>, AppError> {
    let mut multipart =
        multipart.map_err(|_| AppError::Validation("No file part".to_string()))?;
    let (filename, data) = read_file_part(&mut multipart).await?;

    let path = save_upload(&state.config.upload_dir, &filename, &data).await?;

    let extracted_text = state.extractor.extract(&path).await;
    if extracted_text.trim().is_empty() {
        return Err(AppError::ExtractionFailed);
    }

    let parser = state.parser.clone();
    let (details, extracted_text) = tokio::task::spawn_blocking(move || {
        let details = parser.parse(&extracted_text);
        (details, extracted_text)
    })
    .await
    .context("Resume parsing task failed")?;

    info!("Successfully extracted resume details from {filename}");
    Ok(Json(ResumeRecord::new(details, extracted_text)))
}

/// Finds the first `file` part that carries a filename and validates it
/// before reading the body.
async fn read_file_part(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        // A `file` part without a filename is a plain form value, not an upload.
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        if filename.is_empty() {
            return Err(AppError::Validation("No selected file".to_string()));
        }
        if !allowed_file(&filename) {
            return Err(AppError::Validation(
                "Invalid file type. Only PDFs are allowed.".to_string(),
            ));
        }

        let data = field.bytes().await?;
        return Ok((filename, data));
    }

    Err(AppError::Validation("No file part".to_string()))
}

use bytes::Bytes;
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::document::{self, DocumentKind};
use crate::errors::AppError;
use crate::extraction::ResumeExtractor;
use crate::resumes::models::UploadedResume;

/// Default upload ceiling: 5 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// One uploaded file as received from the multipart body.
#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Validates, reads, and extracts an uploaded résumé.
pub async fn process_upload(
    extractor: &ResumeExtractor,
    file: ResumeFile,
    max_bytes: usize,
) -> Result<UploadedResume, AppError> {
    validate_size(file.bytes.len(), max_bytes)?;

    let kind = DocumentKind::detect(file.content_type.as_deref(), &file.file_name).ok_or_else(
        || {
            AppError::UnsupportedMediaType(format!(
                "Unsupported file '{}': accepted formats are PDF and plain text",
                file.file_name
            ))
        },
    )?;

    let bytes = file.bytes.clone();
    let text = tokio::task::spawn_blocking(move || document::read_text(kind, &bytes))
        .await
        .map_err(|e| {
            if e.is_panic() {
                warn!("Document reader panicked on '{}'", file.file_name);
                AppError::UnprocessableEntity("Document could not be read".to_string())
            } else {
                AppError::Internal(e.into())
            }
        })??;

    let extracted_data = extractor.extract(&text);
    info!(
        "Extracted '{}' ({}, {} bytes): {} skills, {} experiences, {} education entries",
        file.file_name,
        kind.as_str(),
        file.bytes.len(),
        extracted_data.skills.len(),
        extracted_data.experiences.len(),
        extracted_data.education.len()
    );

    Ok(UploadedResume {
        id: Uuid::new_v4(),
        size: file.bytes.len() as u64,
        content_type: file
            .content_type
            .unwrap_or_else(|| kind.mime().to_string()),
        name: file.file_name,
        uploaded: Utc::now(),
        extracted_data,
    })
}

fn validate_size(len: usize, max_bytes: usize) -> Result<(), AppError> {
    if len == 0 {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }
    if len > max_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "Uploaded file is {len} bytes; the limit is {max_bytes} bytes"
        )));
    }
    Ok(())
}

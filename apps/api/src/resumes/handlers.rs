use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::extraction::ExtractedResume;
use crate::resumes::models::{ExtractTextRequest, UploadedResume};
use crate::resumes::upload::{process_upload, ResumeFile};
use crate::state::AppState;

/// Multipart field names accepted for the résumé file.
const FILE_FIELDS: &[&str] = &["resume", "file"];

#[derive(Serialize)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
}

/// POST /api/v1/resumes/extract
pub async fn handle_extract_text(
    State(state): State<AppState>,
    Json(req): Json<ExtractTextRequest>,
) -> Json<ExtractedResume> {
    Json(state.extractor.extract(&req.text))
}

/// POST /api/v1/resumes/upload
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadedResume>, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let is_file = field
            .name()
            .map(|name| FILE_FIELDS.contains(&name))
            .unwrap_or(false);
        if !is_file {
            continue;
        }

        let file_name = field.file_name().unwrap_or("resume").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(multipart_error)?;

        let file = ResumeFile {
            file_name,
            content_type,
            bytes,
        };
        let record = process_upload(&state.extractor, file, state.config.max_upload_bytes).await?;
        return Ok(Json(record));
    }

    Err(AppError::Validation(
        "Missing résumé file: send it in a 'resume' multipart field".to_string(),
    ))
}

/// GET /api/v1/skills
pub async fn handle_get_skills(State(state): State<AppState>) -> Json<SkillsResponse> {
    Json(SkillsResponse {
        skills: state.extractor.vocabulary().keywords().to_vec(),
    })
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Malformed multipart body: {}", e.body_text()))
    }
}

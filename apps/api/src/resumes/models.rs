use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::extraction::ExtractedResume;

/// File metadata with its extraction merged in. Shaped for the storage
/// collaborator's `parsed_data` blob and the résumé preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedResume {
    pub id: Uuid,
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub content_type: String,
    pub uploaded: DateTime<Utc>,
    pub extracted_data: ExtractedResume,
}

#[derive(Debug, Deserialize)]
pub struct ExtractTextRequest {
    pub text: String,
}

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::jobs::filter::{filter_jobs, JobFilter, JobListing};

#[derive(Debug, Deserialize)]
pub struct JobSearchRequest {
    pub jobs: Vec<JobListing>,
    #[serde(default)]
    pub filters: JobFilter,
}

#[derive(Debug, Serialize)]
pub struct JobSearchResponse {
    pub jobs: Vec<JobListing>,
    pub total: usize,
}

/// POST /api/v1/jobs/search
pub async fn handle_search_jobs(Json(req): Json<JobSearchRequest>) -> Json<JobSearchResponse> {
    let jobs = filter_jobs(&req.jobs, &req.filters);
    debug!("Job search kept {} of {} listings", jobs.len(), req.jobs.len());
    Json(JobSearchResponse {
        total: jobs.len(),
        jobs,
    })
}

pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::applications::handlers as applications;
use crate::jobs::handlers as jobs;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_HEADROOM: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes + MULTIPART_HEADROOM;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/skills", get(resumes::handle_get_skills))
        // Résumé extraction
        .route(
            "/api/v1/resumes/extract",
            post(resumes::handle_extract_text),
        )
        .route(
            "/api/v1/resumes/upload",
            post(resumes::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Listings and applications
        .route("/api/v1/jobs/search", post(jobs::handle_search_jobs))
        .route(
            "/api/v1/applications/overview",
            post(applications::handle_overview),
        )
        .with_state(state)
}

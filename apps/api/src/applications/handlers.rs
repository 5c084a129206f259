use axum::Json;
use serde::{Deserialize, Serialize};

use crate::applications::tracker::{
    filter_applications, Application, ApplicationStats, ApplicationStatus,
};
use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct OverviewRequest {
    pub applications: Vec<Application>,
    #[serde(default)]
    pub search: String,
    /// A status name, or "all" / absent for every status.
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub applications: Vec<Application>,
    /// Counts over the full input, not the filtered list.
    pub stats: ApplicationStats,
}

/// POST /api/v1/applications/overview
pub async fn handle_overview(
    Json(req): Json<OverviewRequest>,
) -> Result<Json<OverviewResponse>, AppError> {
    let status = parse_status_filter(req.status.as_deref())?;
    Ok(Json(OverviewResponse {
        stats: ApplicationStats::from_applications(&req.applications),
        applications: filter_applications(&req.applications, &req.search, status),
    }))
}

fn parse_status_filter(raw: Option<&str>) -> Result<Option<ApplicationStatus>, AppError> {
    match raw.map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(AppError::Validation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_filter() {
        assert_eq!(parse_status_filter(None).unwrap(), None);
        assert_eq!(parse_status_filter(Some("all")).unwrap(), None);
        assert_eq!(
            parse_status_filter(Some("offer")).unwrap(),
            Some(ApplicationStatus::Offer)
        );
        assert!(matches!(
            parse_status_filter(Some("ghosted")),
            Err(AppError::Validation(_))
        ));
    }
}

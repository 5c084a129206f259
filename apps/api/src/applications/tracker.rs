use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle of a filed application, as shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Applied,
    Viewed,
    Interview,
    Offer,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Viewed,
        ApplicationStatus::Interview,
        ApplicationStatus::Offer,
        ApplicationStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Viewed => "viewed",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Offer => "offer",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApplicationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown application status '{s}'"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub job_title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub applied_date: String,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub match_score: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationStats {
    pub total: usize,
    pub applied: usize,
    pub viewed: usize,
    pub interview: usize,
    pub offer: usize,
    pub rejected: usize,
}

impl ApplicationStats {
    pub fn from_applications(applications: &[Application]) -> Self {
        let mut stats = ApplicationStats {
            total: applications.len(),
            ..Default::default()
        };
        for app in applications {
            let bucket = match app.status {
                ApplicationStatus::Applied => &mut stats.applied,
                ApplicationStatus::Viewed => &mut stats.viewed,
                ApplicationStatus::Interview => &mut stats.interview,
                ApplicationStatus::Offer => &mut stats.offer,
                ApplicationStatus::Rejected => &mut stats.rejected,
            };
            *bucket += 1;
        }
        stats
    }
}

/// Case-insensitive search over job title and company, then an optional
/// status filter (`None` keeps every status). Input order is preserved.
pub fn filter_applications(
    applications: &[Application],
    search: &str,
    status: Option<ApplicationStatus>,
) -> Vec<Application> {
    let search = search.to_lowercase();
    applications
        .iter()
        .filter(|app| {
            search.is_empty()
                || app.job_title.to_lowercase().contains(&search)
                || app.company.to_lowercase().contains(&search)
        })
        .filter(|app| status.map_or(true, |s| app.status == s))
        .cloned()
        .collect()
}

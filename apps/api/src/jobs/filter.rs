//! Job listing filter.
//!
//! Steps run in a fixed order and each is skipped when its filter field is
//! empty: search → job type → location → minimum salary → skills.
//! Input order is preserved.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// First `$<n>K` figure in a salary string, e.g. "$120K-$150K" → 120.
static SALARY_THOUSANDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$([0-9]+)K").expect("Invalid salary regex"));

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "type", default)]
    pub job_type: String,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub posted_at: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub match_score: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobFilter {
    pub search: String,
    pub job_type: Vec<String>,
    pub location: String,
    /// In thousands; 0 disables the step.
    pub min_salary: u32,
    pub skills: Vec<String>,
    /// Accepted for compatibility; listings carry no experience level to compare.
    pub experience: String,
}

pub fn filter_jobs(jobs: &[JobListing], filter: &JobFilter) -> Vec<JobListing> {
    let search = filter.search.to_lowercase();
    let location = filter.location.to_lowercase();

    jobs.iter()
        .filter(|job| search.is_empty() || matches_search(job, &search))
        .filter(|job| filter.job_type.is_empty() || filter.job_type.contains(&job.job_type))
        .filter(|job| location.is_empty() || job.location.to_lowercase().contains(&location))
        .filter(|job| filter.min_salary == 0 || meets_min_salary(job, filter.min_salary))
        .filter(|job| {
            filter.skills.is_empty() || filter.skills.iter().any(|s| job.skills.contains(s))
        })
        .cloned()
        .collect()
}

fn matches_search(job: &JobListing, search: &str) -> bool {
    job.title.to_lowercase().contains(search)
        || job.company.to_lowercase().contains(search)
        || job.description.to_lowercase().contains(search)
        || job
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(search))
}

/// Listings without a parseable `$<n>K` salary are never filtered out.
fn meets_min_salary(job: &JobListing, min_thousands: u32) -> bool {
    match job.salary.as_deref().and_then(salary_thousands) {
        Some(thousands) => thousands >= u64::from(min_thousands),
        None => true,
    }
}

pub fn salary_thousands(salary: &str) -> Option<u64> {
    SALARY_THOUSANDS
        .captures(salary)
        .and_then(|caps| caps[1].parse().ok())
}

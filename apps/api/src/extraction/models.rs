//! Extraction record types.
//!
//! Absence is `None` in memory and a fixed sentinel string on the wire, so
//! consumers that render fields verbatim keep working. Every key is always
//! serialized.

use serde::{Deserialize, Serialize};

pub const NAME_NOT_FOUND: &str = "Name not found";
pub const EMAIL_NOT_FOUND: &str = "Email not found";
pub const PHONE_NOT_FOUND: &str = "Phone not found";
pub const TITLE_NOT_FOUND: &str = "Title not found";
pub const COMPANY_NOT_FOUND: &str = "Company not found";
pub const PERIOD_NOT_FOUND: &str = "Period not found";
pub const DESCRIPTION_NOT_FOUND: &str = "Description not found";
pub const DEGREE_NOT_FOUND: &str = "Degree not found";
pub const INSTITUTION_NOT_FOUND: &str = "Institution not found";
pub const YEAR_NOT_FOUND: &str = "Year not found";

/// Structured record produced from unstructured résumé text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ResumeWire", from = "ResumeWire")]
pub struct ExtractedResume {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Canonical (lower-cased) keywords in vocabulary order.
    pub skills: Vec<String>,
    pub experiences: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ExperienceWire", from = "ExperienceWire")]
pub struct ExperienceEntry {
    pub title: Option<String>,
    pub company: Option<String>,
    /// "<start> - <end>" as written in the source.
    pub period: Option<String>,
    /// Never populated by the extractor.
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "EducationWire", from = "EducationWire")]
pub struct EducationEntry {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub year: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Wire shapes: plain strings with sentinels in place of absence
// ────────────────────────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize)]
struct ResumeWire {
    name: String,
    email: String,
    phone: String,
    #[serde(default)]
    skills: Vec<String>,
    #[serde(default)]
    experiences: Vec<ExperienceEntry>,
    #[serde(default)]
    education: Vec<EducationEntry>,
}

#[derive(Serialize, Deserialize)]
struct ExperienceWire {
    title: String,
    company: String,
    period: String,
    description: String,
}

#[derive(Serialize, Deserialize)]
struct EducationWire {
    degree: String,
    institution: String,
    year: String,
}

fn render(value: Option<String>, sentinel: &str) -> String {
    value.unwrap_or_else(|| sentinel.to_string())
}

fn unrender(value: String, sentinel: &str) -> Option<String> {
    (value != sentinel).then_some(value)
}

impl From<ExtractedResume> for ResumeWire {
    fn from(r: ExtractedResume) -> Self {
        Self {
            name: render(r.name, NAME_NOT_FOUND),
            email: render(r.email, EMAIL_NOT_FOUND),
            phone: render(r.phone, PHONE_NOT_FOUND),
            skills: r.skills,
            experiences: r.experiences,
            education: r.education,
        }
    }
}

impl From<ResumeWire> for ExtractedResume {
    fn from(w: ResumeWire) -> Self {
        Self {
            name: unrender(w.name, NAME_NOT_FOUND),
            email: unrender(w.email, EMAIL_NOT_FOUND),
            phone: unrender(w.phone, PHONE_NOT_FOUND),
            skills: w.skills,
            experiences: w.experiences,
            education: w.education,
        }
    }
}

impl From<ExperienceEntry> for ExperienceWire {
    fn from(e: ExperienceEntry) -> Self {
        Self {
            title: render(e.title, TITLE_NOT_FOUND),
            company: render(e.company, COMPANY_NOT_FOUND),
            period: render(e.period, PERIOD_NOT_FOUND),
            description: render(e.description, DESCRIPTION_NOT_FOUND),
        }
    }
}

impl From<ExperienceWire> for ExperienceEntry {
    fn from(w: ExperienceWire) -> Self {
        Self {
            title: unrender(w.title, TITLE_NOT_FOUND),
            company: unrender(w.company, COMPANY_NOT_FOUND),
            period: unrender(w.period, PERIOD_NOT_FOUND),
            description: unrender(w.description, DESCRIPTION_NOT_FOUND),
        }
    }
}

impl From<EducationEntry> for EducationWire {
    fn from(e: EducationEntry) -> Self {
        Self {
            degree: render(e.degree, DEGREE_NOT_FOUND),
            institution: render(e.institution, INSTITUTION_NOT_FOUND),
            year: render(e.year, YEAR_NOT_FOUND),
        }
    }
}

impl From<EducationWire> for EducationEntry {
    fn from(w: EducationWire) -> Self {
        Self {
            degree: unrender(w.degree, DEGREE_NOT_FOUND),
            institution: unrender(w.institution, INSTITUTION_NOT_FOUND),
            year: unrender(w.year, YEAR_NOT_FOUND),
        }
    }
}

//! Résumé field extractor: independent pattern matches over the full text.
//!
//! Each field is extracted on its own: the first match wins for scalars and
//! every non-overlapping match becomes an entry for experience/education.

use regex::{Captures, Regex};

use crate::extraction::models::{EducationEntry, ExperienceEntry, ExtractedResume};
use crate::extraction::patterns::{EDUCATION, EMAIL, EXPERIENCE, NAME, PHONE};
use crate::extraction::vocabulary::SkillVocabulary;

/// Holds the skill vocabulary; the patterns themselves are process-wide.
#[derive(Debug, Clone, Default)]
pub struct ResumeExtractor {
    vocabulary: SkillVocabulary,
}

impl ResumeExtractor {
    pub fn new(vocabulary: SkillVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    /// Extracts a best-effort record. Never fails; the empty string yields
    /// an all-absent record.
    pub fn extract(&self, text: &str) -> ExtractedResume {
        ExtractedResume {
            name: first_match(&NAME, text),
            email: first_match(&EMAIL, text),
            phone: first_match(&PHONE, text),
            skills: self.vocabulary.matches(text),
            experiences: extract_experiences(text),
            education: extract_education(text),
        }
    }
}

fn first_match(re: &Regex, text: &str) -> Option<String> {
    re.find(text).map(|m| m.as_str().to_string())
}

/// Named group, trimmed. A group that trims to nothing counts as absent.
fn group(caps: &Captures<'_>, name: &str) -> Option<String> {
    caps.name(name)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn extract_experiences(text: &str) -> Vec<ExperienceEntry> {
    EXPERIENCE
        .captures_iter(text)
        .map(|caps| ExperienceEntry {
            title: group(&caps, "title"),
            company: group(&caps, "company"),
            period: group(&caps, "period"),
            description: None,
        })
        .collect()
}

fn extract_education(text: &str) -> Vec<EducationEntry> {
    EDUCATION
        .captures_iter(text)
        .map(|caps| EducationEntry {
            degree: group(&caps, "degree"),
            institution: group(&caps, "institution"),
            year: group(&caps, "year"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::models::DESCRIPTION_NOT_FOUND;

    const FULL_RESUME: &str = "Jane Smith\n\
        Email: jane.smith@example.com\n\
        Phone: +1 555-123-4567.\n\
        Skills: React, TypeScript, SQL.\n\
        Experience:\n\
        Software Engineer at Acme Corp Jan 2020 - Dec 2022.\n\
        Junior Developer at Initech Jun 2018 - Dec 2019.\n\
        Education:\n\
        Bachelor of Science from State University 2018.";

    fn extract(text: &str) -> ExtractedResume {
        ResumeExtractor::default().extract(text)
    }

    #[test]
    fn test_empty_input_yields_all_absent() {
        let r = extract("");
        assert!(r.name.is_none());
        assert!(r.email.is_none());
        assert!(r.phone.is_none());
        assert!(r.skills.is_empty());
        assert!(r.experiences.is_empty());
        assert!(r.education.is_empty());

        let value = serde_json::to_value(&r).unwrap();
        assert_eq!(value["name"], "Name not found");
        assert_eq!(value["email"], "Email not found");
        assert_eq!(value["phone"], "Phone not found");
    }

    #[test]
    fn test_name_and_email() {
        let r = extract("Jane Smith\nReach me at jane.smith@example.com");
        assert_eq!(r.name.as_deref(), Some("Jane Smith"));
        assert_eq!(r.email.as_deref(), Some("jane.smith@example.com"));
    }

    #[test]
    fn test_name_takes_first_occurrence() {
        let r = extract("Curriculum Vitae\nJane Smith");
        assert_eq!(r.name.as_deref(), Some("Curriculum Vitae"));
    }

    #[test]
    fn test_single_skill_uses_canonical_casing() {
        let r = extract("Built dashboards in REACT");
        assert_eq!(r.skills, vec!["react"]);
    }

    #[test]
    fn test_single_experience_entry() {
        let r = extract("Software Engineer at Acme Corp Jan 2020 - Dec 2022");
        assert_eq!(r.experiences.len(), 1);
        let exp = &r.experiences[0];
        assert_eq!(exp.title.as_deref(), Some("Software Engineer"));
        assert_eq!(exp.company.as_deref(), Some("Acme Corp"));
        assert_eq!(exp.period.as_deref(), Some("Jan 2020 - Dec 2022"));
        assert!(exp.description.is_none());

        let value = serde_json::to_value(exp).unwrap();
        assert_eq!(value["description"], DESCRIPTION_NOT_FOUND);
    }

    #[test]
    fn test_single_education_entry() {
        let r = extract("Bachelor of Science from State University 2019");
        assert_eq!(r.education.len(), 1);
        let edu = &r.education[0];
        assert_eq!(edu.degree.as_deref(), Some("Bachelor of Science"));
        assert_eq!(edu.institution.as_deref(), Some("State University"));
        assert_eq!(edu.year.as_deref(), Some("2019"));
    }

    #[test]
    fn test_full_resume() {
        let r = extract(FULL_RESUME);
        assert_eq!(r.name.as_deref(), Some("Jane Smith"));
        assert_eq!(r.email.as_deref(), Some("jane.smith@example.com"));
        assert_eq!(r.phone.as_deref(), Some("+1 555-123-4567"));
        assert_eq!(r.skills, vec!["typescript", "react", "sql"]);

        assert_eq!(r.experiences.len(), 2);
        assert_eq!(r.experiences[0].title.as_deref(), Some("Software Engineer"));
        assert_eq!(r.experiences[1].title.as_deref(), Some("Junior Developer"));
        assert_eq!(r.experiences[1].company.as_deref(), Some("Initech"));
        assert_eq!(r.experiences[1].period.as_deref(), Some("Jun 2018 - Dec 2019"));

        assert_eq!(r.education.len(), 1);
        assert_eq!(r.education[0].institution.as_deref(), Some("State University"));
    }

    #[test]
    fn test_greedy_period_absorbs_following_line() {
        // Without punctuation between entries the second one is swallowed.
        let text = "Developer at Acme Jan 2020 - Dec 2022\nTester at Initech Mar 2018 - Dec 2019";
        let r = extract(text);
        assert_eq!(r.experiences.len(), 1);
        assert_eq!(
            r.experiences[0].period.as_deref(),
            Some("Jan 2020 - Dec 2022\nTester at Initech Mar 2018")
        );
    }

    #[test]
    fn test_greedy_title_absorbs_preceding_heading() {
        let r = extract("Experience\nSoftware Engineer at Acme Corp Jan 2020 - Dec 2022");
        assert_eq!(
            r.experiences[0].title.as_deref(),
            Some("Experience\nSoftware Engineer")
        );
    }

    #[test]
    fn test_injected_vocabulary() {
        let extractor = ResumeExtractor::new(SkillVocabulary::new(["Terraform", "React"]));
        let r = extractor.extract("react and TERRAFORM");
        assert_eq!(r.skills, vec!["terraform", "react"]);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let extractor = ResumeExtractor::default();
        let first = serde_json::to_vec(&extractor.extract(FULL_RESUME)).unwrap();
        let second = serde_json::to_vec(&extractor.extract(FULL_RESUME)).unwrap();
        assert_eq!(first, second);
    }
}

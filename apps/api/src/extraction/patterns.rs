//! Compiled extraction patterns, shared process-wide.
//!
//! The sub-patterns are greedy and unanchored on purpose: a title or
//! institution can absorb neighbouring text when no punctuation separates it.

use once_cell::sync::Lazy;
use regex::Regex;

/// Two consecutive capitalized words, e.g. "Jane Smith".
pub static NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z][a-z]+\s[A-Z][a-z]+").expect("Invalid name regex"));

pub static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("Invalid email regex")
});

/// Optional `+`, a digit, 8+ digits/spaces/hyphens, ending in a digit.
pub static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?[0-9][0-9\s-]{8,}[0-9]").expect("Invalid phone regex"));

/// `<title> at <company> <period1> - <period2>`, each period ending in a year.
pub static EXPERIENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?P<title>[\w\s]+)\s+at\s+(?P<company>[\w\s]+)\s+(?P<period>[\w\s]+[0-9]{4}\s*-\s*[\w\s]+[0-9]{4})",
    )
    .expect("Invalid experience regex")
});

/// `<degree> from <institution> <year>`.
pub static EDUCATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<degree>[\w\s]+)\s+from\s+(?P<institution>[\w\s]+)\s+(?P<year>[0-9]{4})")
        .expect("Invalid education regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        for re in [&NAME, &EMAIL, &PHONE, &EXPERIENCE, &EDUCATION] {
            assert!(!re.as_str().is_empty());
        }
    }

    #[test]
    fn test_name_requires_two_capitalized_words() {
        assert_eq!(NAME.find("hello Jane Smith").unwrap().as_str(), "Jane Smith");
        assert!(NAME.find("JANE SMITH").is_none());
        assert!(NAME.find("Jane").is_none());
    }

    #[test]
    fn test_email_stops_at_tld() {
        let m = EMAIL.find("mail: jane.smith@example.com, thanks").unwrap();
        assert_eq!(m.as_str(), "jane.smith@example.com");
    }

    #[test]
    fn test_phone_must_end_in_digit() {
        let m = PHONE.find("Call +1 555-123-4567 - anytime").unwrap();
        assert_eq!(m.as_str(), "+1 555-123-4567");
    }

    #[test]
    fn test_phone_rejects_short_runs() {
        assert!(PHONE.find("ext 12345").is_none());
    }

    #[test]
    fn test_phone_false_positive_on_long_digit_run() {
        // ZIP+4 glued to a year still looks like a phone number.
        assert_eq!(PHONE.find("zip 123456789 2020").unwrap().as_str(), "123456789 2020");
    }

    #[test]
    fn test_experience_named_groups() {
        let caps = EXPERIENCE
            .captures("Software Engineer at Acme Corp Jan 2020 - Dec 2022")
            .unwrap();
        assert_eq!(&caps["title"], "Software Engineer");
        assert_eq!(&caps["company"], "Acme Corp");
        assert_eq!(&caps["period"], "Jan 2020 - Dec 2022");
    }

    #[test]
    fn test_education_named_groups() {
        let caps = EDUCATION
            .captures("Bachelor of Science from State University 2019")
            .unwrap();
        assert_eq!(&caps["degree"], "Bachelor of Science");
        assert_eq!(&caps["institution"], "State University");
        assert_eq!(&caps["year"], "2019");
    }
}

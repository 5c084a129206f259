//! Skill vocabulary: the keyword list checked against résumé text.
//!
//! Matching is plain case-insensitive containment: no stemming and no word
//! boundaries, so "java" also matches inside "javascript".

/// Built-in keywords, in output order.
pub const DEFAULT_SKILLS: &[&str] = &[
    "javascript",
    "typescript",
    "react",
    "angular",
    "vue",
    "node.js",
    "html",
    "css",
    "python",
    "java",
    "c++",
    "c#",
    "ruby",
    "php",
    "swift",
    "kotlin",
    "rust",
    "golang",
    "sql",
    "postgresql",
    "mongodb",
    "graphql",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "git",
    "figma",
    "agile",
    "scrum",
    "machine learning",
    "data analysis",
];

/// Ordered, lower-cased, de-duplicated keyword list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillVocabulary {
    keywords: Vec<String>,
}

impl SkillVocabulary {
    /// Canonicalizes keywords: trimmed, lower-cased, blanks dropped, first occurrence wins.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut canonical: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if keyword.is_empty() || canonical.contains(&keyword) {
                continue;
            }
            canonical.push(keyword);
        }
        Self {
            keywords: canonical,
        }
    }

    /// Parses a comma-separated list, e.g. `"Rust, Go ,SQL"`.
    pub fn from_list(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Keywords contained in `text`, in vocabulary order.
    pub fn matches(&self, text: &str) -> Vec<String> {
        let haystack = text.to_lowercase();
        self.keywords
            .iter()
            .filter(|k| haystack.contains(k.as_str()))
            .cloned()
            .collect()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS)
    }
}

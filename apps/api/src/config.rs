use anyhow::{bail, Context, Result};

use crate::extraction::SkillVocabulary;
use crate::resumes::upload::DEFAULT_MAX_UPLOAD_BYTES;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    /// Replaces the built-in skill list when set.
    pub skill_vocabulary: Option<SkillVocabulary>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };
        if max_upload_bytes == 0 {
            bail!("MAX_UPLOAD_BYTES must be greater than zero");
        }

        let skill_vocabulary = match lookup("SKILL_VOCABULARY") {
            Some(raw) => {
                let vocabulary = SkillVocabulary::from_list(&raw);
                if vocabulary.is_empty() {
                    bail!("SKILL_VOCABULARY is set but contains no keywords");
                }
                Some(vocabulary)
            }
            None => None,
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_upload_bytes,
            skill_vocabulary,
        })
    }
}

use std::sync::Arc;

use crate::config::Config;
use crate::extraction::ResumeExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Extractor carrying the active skill vocabulary (config override or built-in).
    pub extractor: Arc<ResumeExtractor>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let vocabulary = config.skill_vocabulary.clone().unwrap_or_default();
        Self {
            extractor: Arc::new(ResumeExtractor::new(vocabulary)),
            config,
        }
    }
}

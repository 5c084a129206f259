// Résumé field extraction: document text in, structured record out.
// Pure and infallible. "Not found" is a value here, never an error.

pub mod extractor;
pub mod models;
pub mod patterns;
pub mod vocabulary;

pub use extractor::ResumeExtractor;
pub use models::ExtractedResume;
pub use vocabulary::SkillVocabulary;

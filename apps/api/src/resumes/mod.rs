// Résumé upload: validate → read text → extract → wrap in file metadata.
// The caller persists the returned record; nothing is stored here.

pub mod handlers;
pub mod models;
pub mod upload;

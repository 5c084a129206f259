//! Document reader. Turns uploaded bytes into flattened plain text.
//!
//! PDF goes through `pdf-extract`; plain text must be UTF-8. Word formats are
//! recognised so the caller gets a precise 415 instead of a parse failure.

use std::path::Path;

use tracing::debug;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
    Word,
}

impl DocumentKind {
    /// MIME type first, file extension as fallback.
    pub fn detect(content_type: Option<&str>, file_name: &str) -> Option<Self> {
        content_type
            .and_then(Self::from_mime)
            .or_else(|| Self::from_extension(file_name))
    }

    fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim().to_lowercase();
        match essence.as_str() {
            "application/pdf" => Some(Self::Pdf),
            "text/plain" => Some(Self::PlainText),
            "application/msword"
            | "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(Self::Word)
            }
            _ => None,
        }
    }

    fn from_extension(file_name: &str) -> Option<Self> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)?;
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" => Some(Self::PlainText),
            "doc" | "docx" => Some(Self::Word),
            _ => None,
        }
    }

    /// Canonical MIME type, used when the upload did not declare one.
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::PlainText => "text/plain",
            Self::Word => "application/msword",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::PlainText => "text",
            Self::Word => "word",
        }
    }
}

/// Reads and flattens a document. CPU-bound for PDFs; run it off the async
/// executor.
pub fn read_text(kind: DocumentKind, bytes: &[u8]) -> Result<String, AppError> {
    let raw = match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            AppError::UnprocessableEntity(format!("PDF text could not be extracted: {e:?}"))
        })?,
        DocumentKind::PlainText => String::from_utf8(bytes.to_vec()).map_err(|_| {
            AppError::UnprocessableEntity("Text document is not valid UTF-8".to_string())
        })?,
        DocumentKind::Word => {
            return Err(AppError::UnsupportedMediaType(
                "Word documents are not supported yet; upload a PDF or plain text file"
                    .to_string(),
            ))
        }
    };

    let text = flatten_text(&raw);
    debug!(
        "Read {} document: {} bytes in, {} chars out",
        kind.as_str(),
        bytes.len(),
        text.chars().count()
    );
    Ok(text)
}

/// Normalizes line endings and page breaks to `\n` and trims trailing
/// whitespace from each line.
pub fn flatten_text(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .replace(['\r', '\u{c}'], "\n")
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

//! Text extraction — turns uploaded bytes into raw text.
//!
//! The content type is whatever the uploader declared; bytes are never sniffed.
//! PDF parsing is CPU-bound, so async callers should run `extract_text` inside
//! `tokio::task::spawn_blocking`.

use std::panic;

use thiserror::Error;

/// Failure to turn an upload into text. Distinct from an empty but valid document.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported content type '{0}' (expected a .txt or .pdf file)")]
    UnsupportedContentType(String),

    #[error("file is not valid UTF-8 text: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("could not read PDF: {0}")]
    Pdf(String),
}

/// Document formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    PlainText,
    Pdf,
}

impl ContentType {
    /// Resolves the declared MIME type, falling back to the declared file
    /// extension when the MIME type is absent or generic.
    pub fn from_declared(mime: Option<&str>, file_name: &str) -> Result<Self, ExtractionError> {
        let essence = mime
            .map(|m| m.split(';').next().unwrap_or("").trim().to_ascii_lowercase())
            .filter(|m| !m.is_empty());

        match essence.as_deref() {
            Some("application/pdf") => Ok(ContentType::Pdf),
            Some("text/plain") => Ok(ContentType::PlainText),
            None | Some("application/octet-stream") => Self::from_extension(file_name),
            Some(other) => Err(ExtractionError::UnsupportedContentType(other.to_string())),
        }
    }

    fn from_extension(file_name: &str) -> Result<Self, ExtractionError> {
        let extension = std::path::Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pdf") => Ok(ContentType::Pdf),
            Some("txt") => Ok(ContentType::PlainText),
            _ => Err(ExtractionError::UnsupportedContentType(file_name.to_string())),
        }
    }
}

/// Extracts raw text from `bytes` according to the declared content type.
pub fn extract_text(bytes: &[u8], content_type: ContentType) -> Result<String, ExtractionError> {
    match content_type {
        ContentType::PlainText => Ok(String::from_utf8(bytes.to_vec())?),
        ContentType::Pdf => extract_pdf_text(bytes),
    }
}

/// Page-by-page PDF extraction. Pages with no text are skipped; the rest are
/// joined with newlines.
fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    // pdf-extract panics on some malformed inputs instead of returning an error.
    let pages = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
        .map_err(|_| ExtractionError::Pdf("parser aborted on malformed document".to_string()))?
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    Ok(join_pages(pages))
}

fn join_pages(pages: Vec<String>) -> String {
    pages
        .into_iter()
        .filter(|page| !page.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

//! Resume text extraction from uploaded PDF bytes.

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to extract text from PDF: {0}")]
    Pdf(String),

    #[error("Could not extract text from PDF. Please ensure the PDF contains readable text.")]
    Empty,

    #[error("Extraction task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// True when an upload is a PDF. The MIME type decides; the `.pdf` extension
/// is only consulted when the client sent no type or a generic binary one.
pub fn is_pdf_upload(content_type: Option<&str>, file_name: Option<&str>) -> bool {
    let by_name = || {
        file_name
            .map(|name| name.to_ascii_lowercase().ends_with(".pdf"))
            .unwrap_or(false)
    };
    match content_type {
        Some(ct) if ct.eq_ignore_ascii_case("application/pdf") => true,
        Some(ct) if ct.eq_ignore_ascii_case("application/octet-stream") => by_name(),
        Some(_) => false,
        None => by_name(),
    }
}

/// Extracts plain text from a PDF on the blocking pool.
/// Blank output is an error: there is nothing to score.
pub async fn extract_resume_text(pdf: Bytes) -> Result<String, ExtractError> {
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&pdf))
        .await?
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;

    ensure_readable(text)
}

fn ensure_readable(text: String) -> Result<String, ExtractError> {
    if text.trim().is_empty() {
        return Err(ExtractError::Empty);
    }
    debug!("Extracted {} characters of resume text", text.len());
    Ok(text)
}

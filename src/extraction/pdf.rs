use std::path::Path;

use super::sanitize::sanitize_extracted_text;
use super::ExtractionError;

/// Page-by-page text extraction from PDF bytes.
pub trait PdfExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<String>, ExtractionError>;
}

/// PDF text extractor using the pdf-extract crate.
/// Handles digital PDFs with embedded text layers; scanned pages come back empty.
pub struct PdfTextExtractor;

impl PdfExtractor for PdfTextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
        pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
            .map_err(|e| ExtractionError::PdfParsing(e.to_string()))
    }
}

/// Read a PDF from disk and return its text, pages joined by newlines and
/// surrounding whitespace trimmed. Blocking; call from `spawn_blocking`.
pub fn extract_pdf_text(
    extractor: &dyn PdfExtractor,
    path: &Path,
) -> Result<String, ExtractionError> {
    let bytes = std::fs::read(path)?;
    let pages = extractor.extract_pages(&bytes)?;
    let page_count = pages.len();

    let text = pages
        .iter()
        .map(|page| sanitize_extracted_text(page))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();

    tracing::info!(
        pages = page_count,
        text_length = text.len(),
        "PDF text extraction complete"
    );

    Ok(text)
}

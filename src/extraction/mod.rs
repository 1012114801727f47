//! Text extraction from uploaded PDF briefs.

pub mod pdf;
pub mod sanitize;
pub mod staging;

pub use pdf::*;
pub use sanitize::*;
pub use staging::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF parsing failed: {0}")]
    PdfParsing(String),
}

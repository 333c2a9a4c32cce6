//! Format decoding — turns an uploaded document into plain text.
//!
//! `DocumentDecoder` is the seam the pipeline depends on; `FormatDecoder` is the
//! production implementation dispatching to the PDF and DOCX backends. Decoding is
//! blocking and must run on the blocking pool.

pub mod docx;
pub mod pdf;

use std::path::PathBuf;

use thiserror::Error;

use crate::models::request::DocumentFormat;

pub use docx::DocxDecoder;

/// The underlying decoder rejected the byte stream.
#[derive(Debug, Clone, Error)]
#[error("Failed to decode {format} document: {cause}")]
pub struct DecodeError {
    pub format: DocumentFormat,
    pub cause: String,
}

impl DecodeError {
    pub fn new(format: DocumentFormat, cause: impl Into<String>) -> Self {
        Self {
            format,
            cause: cause.into(),
        }
    }
}

/// Converts document bytes of a known format into plain text (possibly empty).
pub trait DocumentDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8], format: DocumentFormat) -> Result<String, DecodeError>;
}

/// Dispatches to the PDF or DOCX backend.
pub struct FormatDecoder {
    docx: DocxDecoder,
}

impl FormatDecoder {
    /// `scratch_dir` holds transient DOCX artifacts; `None` uses the OS temp dir.
    pub fn new(scratch_dir: Option<PathBuf>) -> Self {
        Self {
            docx: DocxDecoder::new(scratch_dir),
        }
    }
}

impl DocumentDecoder for FormatDecoder {
    fn decode(&self, bytes: &[u8], format: DocumentFormat) -> Result<String, DecodeError> {
        match format {
            DocumentFormat::Pdf => pdf::decode_pdf(bytes),
            DocumentFormat::Docx => self.docx.decode(bytes),
        }
    }
}

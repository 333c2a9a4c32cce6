use std::panic::{self, AssertUnwindSafe};

use tracing::debug;

use crate::decode::DecodeError;
use crate::models::request::DocumentFormat;

/// Extracts the text layer of an in-memory PDF.
///
/// The extraction backend can panic on some malformed streams; a panic is reported as a
/// `DecodeError` for this document only.
pub fn decode_pdf(bytes: &[u8]) -> Result<String, DecodeError> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes)));

    match outcome {
        Ok(Ok(text)) => {
            debug!(chars = text.len(), "PDF decoded");
            Ok(text)
        }
        Ok(Err(e)) => Err(DecodeError::new(DocumentFormat::Pdf, e.to_string())),
        Err(payload) => Err(DecodeError::new(
            DocumentFormat::Pdf,
            format!("PDF backend panicked: {}", panic_message(payload.as_ref())),
        )),
    }
}

pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

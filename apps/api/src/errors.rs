use std::time::Duration;

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::decode::DecodeError;
use crate::models::envelope::{ResponseEnvelope, ERROR_PARSING_RESUME, UNSUPPORTED_FILE_TYPE};

/// Failures that end an extraction request.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, ExtractError>`.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Decoding did not finish within {0:?}")]
    DecodeTimeout(Duration),

    #[error("Upload body is not valid base64: {0}")]
    InvalidBody(#[from] base64::DecodeError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ExtractError {
    pub fn into_envelope(self) -> ResponseEnvelope {
        match &self {
            ExtractError::UnsupportedFormat(_) => ResponseEnvelope::bad_request(UNSUPPORTED_FILE_TYPE),
            ExtractError::Decode(e) => {
                tracing::warn!("Decode failed: {e}");
                ResponseEnvelope::server_error(ERROR_PARSING_RESUME, self.to_string())
            }
            ExtractError::DecodeTimeout(limit) => {
                tracing::warn!("Decode timed out after {limit:?}");
                ResponseEnvelope::server_error(ERROR_PARSING_RESUME, self.to_string())
            }
            ExtractError::InvalidBody(_) | ExtractError::Internal(_) => {
                tracing::error!("Extraction request failed: {self}");
                ResponseEnvelope::server_error(ERROR_PARSING_RESUME, self.to_string())
            }
        }
    }
}

impl IntoResponse for ExtractError {
    fn into_response(self) -> Response {
        self.into_envelope().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::request::DocumentFormat;

    #[test]
    fn test_unsupported_format_maps_to_400() {
        let err = ExtractError::UnsupportedFormat("text/plain".to_string());
        let envelope = err.into_envelope();
        assert_eq!(envelope.status_code, 400);
        assert_eq!(envelope.message.as_deref(), Some("Unsupported file type"));
        assert!(envelope.error.is_none());
    }

    #[test]
    fn test_decode_error_maps_to_500_with_cause() {
        let err = ExtractError::from(DecodeError::new(DocumentFormat::Pdf, "bad xref"));
        let envelope = err.into_envelope();
        assert_eq!(envelope.status_code, 500);
        assert_eq!(envelope.message.as_deref(), Some("Error parsing resume"));
        let error = envelope.error.unwrap();
        assert!(error.contains("PDF"));
        assert!(error.contains("bad xref"));
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_timeout_maps_to_500() {
        let envelope = ExtractError::DecodeTimeout(Duration::from_secs(30)).into_envelope();
        assert_eq!(envelope.status_code, 500);
        assert!(envelope.error.unwrap().contains("30s"));
    }
}

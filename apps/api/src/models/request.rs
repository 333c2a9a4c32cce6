use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use serde::Deserialize;

use crate::errors::ExtractError;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Binary formats the decoder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Matches a MIME string, ignoring parameters and ASCII case.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        if essence.eq_ignore_ascii_case(PDF_MIME) {
            Some(DocumentFormat::Pdf)
        } else if essence.eq_ignore_ascii_case(DOCX_MIME) {
            Some(DocumentFormat::Docx)
        } else {
            None
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Pdf => f.write_str("PDF"),
            DocumentFormat::Docx => f.write_str("DOCX"),
        }
    }
}

/// The content type asserted by the caller. Not checked against the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredType {
    Supported(DocumentFormat),
    Unsupported(String),
}

impl DeclaredType {
    pub fn from_mime(mime: &str) -> Self {
        match DocumentFormat::from_mime(mime) {
            Some(format) => DeclaredType::Supported(format),
            None => DeclaredType::Unsupported(mime.to_string()),
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclaredType::Supported(format) => write!(f, "{format}"),
            DeclaredType::Unsupported(mime) if mime.is_empty() => f.write_str("<none>"),
            DeclaredType::Unsupported(mime) => f.write_str(mime),
        }
    }
}

/// One document to run through the pipeline.
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    pub raw_bytes: Bytes,
    pub declared_type: DeclaredType,
}

/// Wire payload: `{ "uploadCv": { "body": "<base64>", "format": "<mime>" } }`.
#[derive(Debug, Deserialize)]
pub struct ParseResumeRequest {
    #[serde(rename = "uploadCv")]
    pub upload_cv: UploadCv,
}

#[derive(Debug, Deserialize)]
pub struct UploadCv {
    pub body: String,
    #[serde(default)]
    pub format: Option<String>,
}

impl ExtractionRequest {
    pub fn new(raw_bytes: impl Into<Bytes>, declared_type: DeclaredType) -> Self {
        Self {
            raw_bytes: raw_bytes.into(),
            declared_type,
        }
    }

    /// Builds a request from an upload, using `content_type` when the upload names no
    /// format. The base64 body is only decoded for supported types, so an unsupported
    /// type is still reported as such even when the body is garbage.
    pub fn from_upload(upload: UploadCv, content_type: Option<&str>) -> Result<Self, ExtractError> {
        let mime = upload
            .format
            .as_deref()
            .or(content_type)
            .unwrap_or_default();
        let declared_type = DeclaredType::from_mime(mime);

        let raw_bytes = match declared_type {
            DeclaredType::Supported(_) => STANDARD.decode(upload.body.trim())?,
            DeclaredType::Unsupported(_) => Vec::new(),
        };

        Ok(Self::new(raw_bytes, declared_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(body: &str, format: Option<&str>) -> UploadCv {
        UploadCv {
            body: body.to_string(),
            format: format.map(String::from),
        }
    }

    #[test]
    fn test_from_mime_recognises_both_formats() {
        assert_eq!(DocumentFormat::from_mime(PDF_MIME), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_mime(DOCX_MIME), Some(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::from_mime("text/plain"), None);
        assert_eq!(DocumentFormat::from_mime(""), None);
    }

    #[test]
    fn test_from_mime_ignores_parameters_and_case() {
        assert_eq!(
            DocumentFormat::from_mime("Application/PDF; charset=binary"),
            Some(DocumentFormat::Pdf)
        );
    }

    #[test]
    fn test_format_field_takes_precedence_over_header() {
        let request =
            ExtractionRequest::from_upload(upload("aGVsbG8=", Some(PDF_MIME)), Some(DOCX_MIME))
                .unwrap();
        assert_eq!(
            request.declared_type,
            DeclaredType::Supported(DocumentFormat::Pdf)
        );
        assert_eq!(&request.raw_bytes[..], b"hello");
    }

    #[test]
    fn test_header_is_used_when_format_missing() {
        let request = ExtractionRequest::from_upload(upload("aGVsbG8=", None), Some(DOCX_MIME))
            .unwrap();
        assert_eq!(
            request.declared_type,
            DeclaredType::Supported(DocumentFormat::Docx)
        );
    }

    #[test]
    fn test_unsupported_type_skips_body_decoding() {
        let request =
            ExtractionRequest::from_upload(upload("%%% not base64 %%%", Some("image/png")), None)
                .unwrap();
        assert_eq!(
            request.declared_type,
            DeclaredType::Unsupported("image/png".to_string())
        );
        assert!(request.raw_bytes.is_empty());
    }

    #[test]
    fn test_invalid_base64_for_supported_type_is_an_error() {
        let result = ExtractionRequest::from_upload(upload("%%% not base64 %%%", Some(PDF_MIME)), None);
        assert!(matches!(result, Err(ExtractError::InvalidBody(_))));
    }

    #[test]
    fn test_payload_deserializes_from_wire_shape() {
        let json = r#"{"uploadCv": {"body": "aGVsbG8="}}"#;
        let payload: ParseResumeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(payload.upload_cv.body, "aGVsbG8=");
        assert!(payload.upload_cv.format.is_none());
    }
}

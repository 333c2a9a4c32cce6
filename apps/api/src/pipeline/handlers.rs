//! Axum route handlers for the résumé parsing API.

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap},
};
use bytes::Bytes;
use tracing::warn;

use crate::errors::ExtractError;
use crate::models::envelope::ResponseEnvelope;
use crate::models::request::{DeclaredType, ExtractionRequest, ParseResumeRequest};
use crate::state::AppState;

pub const INVALID_REQUEST_BODY: &str = "Invalid request body";

fn content_type(headers: &HeaderMap) -> Option<&str> {
    headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
}

/// POST /api/v1/resumes/parse
///
/// Body: `{ "uploadCv": { "body": "<base64>", "format": "<mime>" } }`. When `format` is
/// absent the request's `Content-Type` header is used as the declared type, so the body
/// is read as JSON regardless of that header.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<ResponseEnvelope, ExtractError> {
    let payload: ParseResumeRequest = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Rejecting malformed parse request: {e}");
            return Ok(ResponseEnvelope::bad_request(INVALID_REQUEST_BODY));
        }
    };

    let request = ExtractionRequest::from_upload(payload.upload_cv, content_type(&headers))?;
    Ok(state.pipeline.respond(request).await)
}

/// POST /api/v1/resumes/parse/raw
///
/// Body: the document bytes. `Content-Type` is the declared type.
pub async fn handle_parse_raw(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ResponseEnvelope {
    let declared_type = DeclaredType::from_mime(content_type(&headers).unwrap_or_default());
    state
        .pipeline
        .respond(ExtractionRequest::new(body, declared_type))
        .await
}

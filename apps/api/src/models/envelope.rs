use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::ExtractError;
use crate::models::record::ExtractedRecord;

pub const UNSUPPORTED_FILE_TYPE: &str = "Unsupported file type";
pub const ERROR_PARSING_RESUME: &str = "Error parsing resume";

/// Uniform response shape: `data` on 200, `message` otherwise, `error` on 500.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ExtractedRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponseEnvelope {
    pub fn ok(record: ExtractedRecord) -> Self {
        Self {
            status_code: 200,
            data: Some(record),
            message: None,
            error: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status_code: 400,
            data: None,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn server_error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            status_code: 500,
            data: None,
            message: Some(message.into()),
            error: Some(error.into()),
        }
    }
}

impl From<Result<ExtractedRecord, ExtractError>> for ResponseEnvelope {
    fn from(result: Result<ExtractedRecord, ExtractError>) -> Self {
        match result {
            Ok(record) => ResponseEnvelope::ok(record),
            Err(e) => e.into_envelope(),
        }
    }
}

impl IntoResponse for ResponseEnvelope {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

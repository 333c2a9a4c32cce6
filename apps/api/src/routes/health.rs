use axum::Json;
use serde_json::{json, Value};

use crate::models::request::{DOCX_MIME, PDF_MIME};

/// GET /health
/// Service identity plus the upload formats the parser accepts.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "cv-parser-api",
        "formats": [PDF_MIME, DOCX_MIME]
    }))
}

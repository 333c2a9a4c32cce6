pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::pipeline::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // base64 inflates uploads by a third; the limit applies to the encoded body.
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes/parse", post(handlers::handle_parse_resume))
        .route("/api/v1/resumes/parse/raw", post(handlers::handle_parse_raw))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Request, StatusCode},
    };
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::decode::fixtures;
    use crate::models::request::{DOCX_MIME, PDF_MIME};

    fn router() -> Router {
        let state = AppState::from_config(&Config::default()).unwrap();
        build_router(state)
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = router().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn parse_request(payload: Value, content_type: &str) -> Request<Body> {
        Request::post("/api/v1/resumes/parse")
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(payload.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_parse_docx_upload() {
        let docx = fixtures::docx_with_paragraphs(&[
            "Jane Doe",
            "jane.doe@example.com",
            "t.me/janedoe",
        ]);
        let payload = json!({"uploadCv": {"body": STANDARD.encode(docx), "format": DOCX_MIME}});

        let (status, body) = send(parse_request(payload, "application/json")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["statusCode"], 200);
        assert_eq!(body["data"]["fullName"], "Jane Doe");
        assert_eq!(body["data"]["email"], "jane.doe@example.com");
        assert_eq!(body["data"]["telegram"], "t.me/janedoe");
        assert!(body["data"]["desiredSalary"].is_null());
        assert!(body.get("message").is_none());
    }

    #[tokio::test]
    async fn test_content_type_header_is_format_fallback() {
        let docx = fixtures::docx_with_paragraphs(&["jane.doe@example.com"]);
        let payload = json!({"uploadCv": {"body": STANDARD.encode(docx)}});

        let (status, body) = send(parse_request(payload, DOCX_MIME)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["email"], "jane.doe@example.com");
    }

    #[tokio::test]
    async fn test_unsupported_format_is_400() {
        let payload = json!({"uploadCv": {"body": "not base64 at all", "format": "image/png"}});

        let (status, body) = send(parse_request(payload, "application/json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"statusCode": 400, "message": "Unsupported file type"})
        );
    }

    #[tokio::test]
    async fn test_missing_format_with_json_header_is_400() {
        let payload = json!({"uploadCv": {"body": ""}});
        let (status, _) = send(parse_request(payload, "application/json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_corrupt_pdf_is_500() {
        let payload = json!({"uploadCv": {"body": STANDARD.encode(b"not a pdf"), "format": PDF_MIME}});

        let (status, body) = send(parse_request(payload, "application/json")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["statusCode"], 500);
        assert_eq!(body["message"], "Error parsing resume");
        assert!(body["error"].as_str().unwrap().contains("PDF"));
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn test_invalid_base64_is_500() {
        let payload = json!({"uploadCv": {"body": "***", "format": PDF_MIME}});
        let (status, body) = send(parse_request(payload, "application/json")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Error parsing resume");
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let request = Request::post("/api/v1/resumes/parse")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid request body");
    }

    #[tokio::test]
    async fn test_raw_upload_uses_content_type() {
        let docx = fixtures::docx_with_paragraphs(&["Languages: French, German"]);
        let request = Request::post("/api/v1/resumes/parse/raw")
            .header(CONTENT_TYPE, DOCX_MIME)
            .body(Body::from(docx))
            .unwrap();

        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["languages"], json!(["French", "German"]));
    }

    #[tokio::test]
    async fn test_raw_upload_without_content_type_is_400() {
        let request = Request::post("/api/v1/resumes/parse/raw")
            .body(Body::from("hello"))
            .unwrap();
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

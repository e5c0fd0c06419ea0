pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/brands", get(generation::handle_list_brands))
        // Session API
        .route("/api/v1/sessions", post(session::handle_upload))
        .route(
            "/api/v1/sessions/:id",
            get(session::handle_get_session).delete(session::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/selection",
            patch(session::handle_update_selection),
        )
        // Generation API
        .route(
            "/api/v1/sessions/:id/keywords/suggest",
            post(generation::handle_suggest_keywords),
        )
        .route(
            "/api/v1/sessions/:id/sections",
            delete(generation::handle_clear_sections),
        )
        .route(
            "/api/v1/sessions/:id/sections/:section",
            post(generation::handle_generate_section).put(generation::handle_edit_section),
        )
        .route(
            "/api/v1/sessions/:id/export/json",
            get(generation::handle_export_json),
        )
        .route(
            "/api/v1/sessions/:id/export/document",
            get(generation::handle_export_document),
        )
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::brand::BrandCatalog;
    use crate::config::Config;
    use crate::llm_client::{GenerationClient, LlmError, ResponseMode};
    use crate::session::{Session, SessionStore};
    use crate::sheet::normalize;
    use crate::sheet::reader::RawPair;

    struct EchoClient;

    #[async_trait]
    impl GenerationClient for EchoClient {
        async fn complete(&self, _: &str, _: &str, _: ResponseMode) -> Result<String, LlmError> {
            Ok("Generated text".to_string())
        }
    }

    fn state() -> AppState {
        AppState {
            llm: Arc::new(EchoClient),
            catalog: BrandCatalog::default(),
            sessions: SessionStore::new(),
            config: Config {
                openai_api_key: None,
                openai_api_url: None,
                port: 0,
                rust_log: "info".to_string(),
                max_upload_bytes: 1024 * 1024,
                session_ttl_secs: 3600,
            },
        }
    }

    async fn open_session(state: &AppState) -> Uuid {
        let product = normalize([RawPair {
            label: "Product Name".to_string(),
            value: "Glow Serum".to_string(),
        }])
        .unwrap();
        let session = Session::open(product, &state.catalog, None);
        let id = session.id;
        state.sessions.insert(session).await;
        id
    }

    async fn send(state: &AppState, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, String) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => request
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = build_router(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&state(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\"status\":\"ok\""));
    }

    #[tokio::test]
    async fn test_brands_listed_without_aliases() {
        let (status, body) = send(&state(), Method::GET, "/api/v1/brands", None).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["brands"].as_array().unwrap().len(), 4);
        assert!(json["brands"][0].get("aliases").is_none());
    }

    #[tokio::test]
    async fn test_unknown_session_is_404() {
        let uri = format!("/api/v1/sessions/{}", Uuid::new_v4());
        let (status, body) = send(&state(), Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("NOT_FOUND"));
    }

    #[tokio::test]
    async fn test_generation_flow_over_http() {
        let state = state();
        let id = open_session(&state).await;
        let base = format!("/api/v1/sessions/{id}");

        // No category confirmed yet.
        let (status, body) =
            send(&state, Method::POST, &format!("{base}/sections/title"), None).await;
        assert_eq!(status, StatusCode::PRECONDITION_REQUIRED);
        assert!(body.contains("PRECONDITION_REQUIRED"));

        let (status, _) = send(
            &state,
            Method::PATCH,
            &format!("{base}/selection"),
            Some(json!({"category": "Beauty", "brand": "Seoul Skin"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        // Amazon title still needs keywords.
        let (status, _) =
            send(&state, Method::POST, &format!("{base}/sections/title"), None).await;
        assert_eq!(status, StatusCode::PRECONDITION_REQUIRED);

        send(
            &state,
            Method::PATCH,
            &format!("{base}/selection"),
            Some(json!({"keywords": "glow serum, vitamin c"})),
        )
        .await;
        let (status, body) =
            send(&state, Method::POST, &format!("{base}/sections/title"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Generated text"));

        let (status, body) = send(&state, Method::GET, &format!("{base}/export/json"), None).await;
        assert_eq!(status, StatusCode::OK);
        let export: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(export["title"], "Generated text");
        assert_eq!(export["faqs"], "");

        let (_, body) =
            send(&state, Method::GET, &format!("{base}/export/document"), None).await;
        assert!(body.starts_with("# Product Listing Content - Glow Serum"));

        let (status, body) =
            send(&state, Method::DELETE, &format!("{base}/sections"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\"cleared\":1"));
    }

    #[tokio::test]
    async fn test_keyword_suggestion_needs_confirmed_category() {
        let state = state();
        let id = open_session(&state).await;
        let uri = format!("/api/v1/sessions/{id}/keywords/suggest");

        let (status, body) = send(&state, Method::POST, &uri, None).await;
        assert_eq!(status, StatusCode::PRECONDITION_REQUIRED);
        assert!(body.contains("PRECONDITION_REQUIRED"));

        send(
            &state,
            Method::PATCH,
            &format!("/api/v1/sessions/{id}/selection"),
            Some(json!({"category": "Electronics"})),
        )
        .await;
        // Now the collaborator is called; its plain-text reply is not JSON.
        let (status, body) = send(&state, Method::POST, &uri, None).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.contains("Error generating keywords"));
    }

    #[tokio::test]
    async fn test_unknown_section_key_is_404() {
        let state = state();
        let id = open_session(&state).await;
        let uri = format!("/api/v1/sessions/{id}/sections/web_full");
        let (status, _) = send(&state, Method::POST, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_upload_field_is_validation_error() {
        let boundary = "XBOUNDARY";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nhello\r\n--{boundary}--\r\n"
        );
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/sessions")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();
        let response = build_router(state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_garbage_upload_is_sheet_parse_error() {
        let boundary = "XBOUNDARY";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"kld.xlsx\"\r\nContent-Type: application/octet-stream\r\n\r\nnot a workbook\r\n--{boundary}--\r\n"
        );
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/sessions")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();
        let response = build_router(state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

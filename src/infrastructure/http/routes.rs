//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                 GET   健康检查
//! - /api/meta                 GET   站点元数据
//! - /api/chapters             GET   章节目录（?current=slug 标记当前章节）
//! - /api/chapters/start       GET   落地页导航
//! - /api/chapter/navigation   POST  指定章节的前后导航
//! - /api/chapter/get          POST  章节页（章节、导航、canonical URL）
//! - /api/share                POST  分享或复制链接

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/meta", get(handlers::get_meta))
        .nest("/chapters", chapters_routes())
        .nest("/chapter", chapter_routes())
        .route("/share", post(handlers::share))
}

/// 目录路由
fn chapters_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::list_chapters))
        .route("/start", get(handlers::start_navigation))
}

/// 单章节路由
fn chapter_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/navigation", post(handlers::chapter_navigation))
        .route("/get", post(handlers::get_chapter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, header::HOST, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use crate::application::{FailurePolicy, ShareDispatcher};
    use crate::domain::chapter::{ChapterRef, Meta};
    use crate::infrastructure::adapters::{HostSharePlatform, InMemoryClipboard};
    use crate::infrastructure::content::InMemoryContentIndex;
    use crate::infrastructure::http::state::HostResolver;

    fn app(platform: HostSharePlatform) -> Router {
        let content = Arc::new(InMemoryContentIndex::new(
            Meta::new("Field Notes", "A short book about birds."),
            vec![
                ChapterRef::new("intro", "Introduction", 1),
                ChapterRef::new("sparrows", "Sparrows", 2),
                ChapterRef::new("owls", "Owls", 3),
            ],
        ));
        let dispatcher = ShareDispatcher::new(Arc::new(platform), FailurePolicy::Degrade);
        let state = AppState::new(
            content,
            dispatcher,
            HostResolver::new(None, "http://localhost:5080"),
        );
        create_routes().with_state(Arc::new(state))
    }

    fn clipboard_app() -> Router {
        app(HostSharePlatform::unavailable().with_clipboard(Arc::new(InMemoryClipboard::new())))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .header(HOST, "books.example.com")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_ping() {
        let response = clipboard_app().oneshot(get("/api/ping")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["chapters"], 3);
    }

    #[tokio::test]
    async fn test_start_navigation_points_to_first_chapter() {
        let response = clipboard_app().oneshot(get("/api/chapters/start")).await.unwrap();
        let body = body_json(response).await;

        assert_eq!(body["errno"], 0);
        assert!(body["data"]["previous"].is_null());
        assert_eq!(body["data"]["next"]["slug"], "intro");
        assert_eq!(body["data"]["next"]["href"], "/intro");
    }

    #[tokio::test]
    async fn test_chapter_navigation() {
        let response = clipboard_app()
            .oneshot(post_json("/api/chapter/navigation", json!({ "slug": "owls" })))
            .await
            .unwrap();
        let body = body_json(response).await;

        assert_eq!(body["data"]["previous"]["slug"], "sparrows");
        assert!(body["data"]["next"].is_null());
    }

    #[tokio::test]
    async fn test_list_chapters_marks_current() {
        let response = clipboard_app()
            .oneshot(get("/api/chapters?current=sparrows"))
            .await
            .unwrap();
        let body = body_json(response).await;

        let entries = body["data"].as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1]["is_current"], true);
        assert_eq!(entries[0]["is_current"], false);
    }

    #[tokio::test]
    async fn test_get_chapter_uses_request_host() {
        let response = clipboard_app()
            .oneshot(post_json("/api/chapter/get", json!({ "slug": "sparrows" })))
            .await
            .unwrap();
        let body = body_json(response).await;

        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["chapter"]["title"], "Sparrows");
        assert_eq!(body["data"]["canonical_url"], "https://books.example.com/sparrows");
        assert_eq!(body["data"]["navigation"]["previous"]["slug"], "intro");
        assert_eq!(body["data"]["navigation"]["next"]["slug"], "owls");
    }

    #[tokio::test]
    async fn test_get_chapter_without_slug_is_rejected() {
        let response = clipboard_app()
            .oneshot(post_json("/api/chapter/get", json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["errno"], 400);
        assert_eq!(body["error"], "slug is required");
    }

    #[tokio::test]
    async fn test_get_unknown_chapter() {
        let response = clipboard_app()
            .oneshot(post_json("/api/chapter/get", json!({ "slug": "eagles" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["errno"], 404);
    }

    #[tokio::test]
    async fn test_share_copies_link() {
        let response = clipboard_app()
            .oneshot(post_json("/api/share", json!({ "slug": "owls" })))
            .await
            .unwrap();
        let body = body_json(response).await;

        assert_eq!(body["data"]["outcome"], "copied");
        assert_eq!(body["data"]["method"], "clipboard");
        assert_eq!(body["data"]["data"]["url"], "https://books.example.com/owls");
        assert_eq!(body["data"]["toasts"][0]["title"], "Link Copied");
    }

    #[tokio::test]
    async fn test_share_without_capabilities_reports_failure_toast() {
        let response = app(HostSharePlatform::unavailable())
            .oneshot(post_json("/api/share", json!({})))
            .await
            .unwrap();
        let body = body_json(response).await;

        assert_eq!(body["data"]["outcome"], "failed");
        assert!(body["data"]["method"].is_null());
        assert_eq!(body["data"]["toasts"][0]["title"], "Could not share");
        assert_eq!(body["data"]["data"]["url"], "https://books.example.com/");
    }

    #[tokio::test]
    async fn test_meta() {
        let response = clipboard_app().oneshot(get("/api/meta")).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["data"]["title"], "Field Notes");
        assert_eq!(body["data"]["body"], "A short book about birds.");
    }
}

//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use axum::http::{header::HOST, HeaderMap};

use crate::application::{
    // Command handlers
    ShareChapterHandler,
    // Query handlers
    GetChapterNavigationHandler, GetChapterPageHandler, GetMetaHandler, ListChaptersHandler,
    // Ports
    ContentIndexPort,
    ShareDispatcher,
};

/// canonical/分享链接的 host 来源
///
/// 优先级：配置的 base_url > 请求 Host 头 > 默认地址
#[derive(Debug, Clone)]
pub struct HostResolver {
    base_url: Option<String>,
    fallback: String,
}

impl HostResolver {
    pub fn new(base_url: Option<String>, fallback: impl Into<String>) -> Self {
        Self {
            base_url,
            fallback: fallback.into(),
        }
    }

    pub fn resolve(&self, headers: &HeaderMap) -> String {
        if let Some(base_url) = &self.base_url {
            return base_url.clone();
        }

        headers
            .get(HOST)
            .and_then(|value| value.to_str().ok())
            .filter(|host| !host.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.fallback.clone())
    }
}

/// 应用状态
pub struct AppState {
    pub host_resolver: HostResolver,

    // ========== Command Handlers ==========
    pub share_chapter_handler: ShareChapterHandler,

    // ========== Query Handlers ==========
    pub list_chapters_handler: ListChaptersHandler,
    pub get_navigation_handler: GetChapterNavigationHandler,
    pub get_chapter_page_handler: GetChapterPageHandler,
    pub get_meta_handler: GetMetaHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        content: Arc<dyn ContentIndexPort>,
        dispatcher: ShareDispatcher,
        host_resolver: HostResolver,
    ) -> Self {
        Self {
            host_resolver,

            share_chapter_handler: ShareChapterHandler::new(content.clone(), dispatcher),

            list_chapters_handler: ListChaptersHandler::new(content.clone()),
            get_navigation_handler: GetChapterNavigationHandler::new(content.clone()),
            get_chapter_page_handler: GetChapterPageHandler::new(content.clone()),
            get_meta_handler: GetMetaHandler::new(content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_configured_base_url_wins() {
        let resolver = HostResolver::new(
            Some("https://books.example.com".to_string()),
            "http://localhost:5080",
        );
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("internal:5080"));

        assert_eq!(resolver.resolve(&headers), "https://books.example.com");
    }

    #[test]
    fn test_host_header_then_fallback() {
        let resolver = HostResolver::new(None, "http://localhost:5080");
        let mut headers = HeaderMap::new();
        assert_eq!(resolver.resolve(&headers), "http://localhost:5080");

        headers.insert(HOST, HeaderValue::from_static("books.example.com"));
        assert_eq!(resolver.resolve(&headers), "books.example.com");
    }
}

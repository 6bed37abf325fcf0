//! Request URL - 绝对 URL 构造
//!
//! 服务端没有浏览器 location，需要从 Host 和路由拼出 canonical/分享链接

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Invalid host '{host}': {reason}")]
    InvalidHost { host: String, reason: String },

    #[error("Invalid route '{route}': {reason}")]
    InvalidRoute { route: String, reason: String },
}

/// 构造绝对 URL
///
/// host 没有 `http://` 或 `https://` 前缀时补 `https://`，
/// route 按标准 URL 解析规则相对 host 解析。
///
/// # 示例
/// - `("example.com", Some("/foo"))` -> `https://example.com/foo`
/// - `("http://example.com", Some("/foo"))` -> `http://example.com/foo`
/// - `("https://example.com/base/", None)` -> `https://example.com/base/`
pub fn build_request_url(host: &str, route: Option<&str>) -> Result<String, UrlError> {
    let base = Url::parse(&add_scheme_to_host(host)).map_err(|e| UrlError::InvalidHost {
        host: host.to_string(),
        reason: e.to_string(),
    })?;

    let route = route.unwrap_or_default();
    let url = base.join(route).map_err(|e| UrlError::InvalidRoute {
        route: route.to_string(),
        reason: e.to_string(),
    })?;

    Ok(url.into())
}

fn add_scheme_to_host(host: &str) -> String {
    if host.starts_with("http://") || host.starts_with("https://") {
        return host.to_string();
    }
    format!("https://{}", host)
}

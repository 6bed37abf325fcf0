//! Response Invariant - 请求边界断言
//!
//! 条件不成立时返回携带 HTTP 状态（默认 400）的拒绝，
//! 状态和响应头可以覆盖

use axum::{
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::error::ErrorResponse;

/// 覆盖拒绝响应的字段
#[derive(Debug, Clone, Default)]
pub struct ResponseInit {
    pub status: Option<StatusCode>,
    pub headers: HeaderMap,
}

impl ResponseInit {
    pub fn with_status(status: StatusCode) -> Self {
        Self {
            status: Some(status),
            headers: HeaderMap::new(),
        }
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// 断言失败时的响应
#[derive(Debug, Clone)]
pub struct ResponseRejection {
    pub status: StatusCode,
    pub message: String,
    pub headers: HeaderMap,
}

/// 条件为假时返回 [`ResponseRejection`]，默认状态 400
pub fn invariant_response(
    condition: bool,
    message: impl Into<String>,
    init: Option<ResponseInit>,
) -> Result<(), ResponseRejection> {
    invariant_response_with(condition, || message.into(), init)
}

/// 同 [`invariant_response`]，消息只在失败时生成
pub fn invariant_response_with<F>(
    condition: bool,
    message: F,
    init: Option<ResponseInit>,
) -> Result<(), ResponseRejection>
where
    F: FnOnce() -> String,
{
    if condition {
        return Ok(());
    }

    let init = init.unwrap_or_default();
    Err(ResponseRejection {
        status: init.status.unwrap_or(StatusCode::BAD_REQUEST),
        message: message(),
        headers: init.headers,
    })
}

impl IntoResponse for ResponseRejection {
    fn into_response(self) -> Response {
        tracing::warn!(
            status = %self.status.as_u16(),
            error = %self.message,
            "Request rejected"
        );
        let body = ErrorResponse::new(i32::from(self.status.as_u16()), self.message);
        (self.status, self.headers, Json(body)).into_response()
    }
}

//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::ContentError;
use crate::application::share::ShareError;
use crate::domain::{InvariantError, UrlError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 内容索引错误
    #[error("Content error: {0}")]
    ContentError(String),

    /// 外部服务错误（分享宿主）
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<ContentError> for ApplicationError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::ChapterNotFound(slug) => Self::not_found("Chapter", slug),
            other => Self::ContentError(other.to_string()),
        }
    }
}

impl From<InvariantError> for ApplicationError {
    fn from(err: InvariantError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<UrlError> for ApplicationError {
    fn from(err: UrlError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<ShareError> for ApplicationError {
    fn from(err: ShareError) -> Self {
        Self::ExternalServiceError(err.to_string())
    }
}

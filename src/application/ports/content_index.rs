//! Content Index Port - 内容索引
//!
//! 提供有序章节列表和站点元数据，数据在构建期生成，核心逻辑不做校验

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::chapter::{ChapterRef, Meta};

/// 内容索引错误
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Chapter not found: {0}")]
    ChapterNotFound(String),

    #[error("Failed to read content index: {0}")]
    ReadError(String),

    #[error("Failed to parse content index: {0}")]
    ParseError(String),
}

/// Content Index Port
#[async_trait]
pub trait ContentIndexPort: Send + Sync {
    /// 按内容源顺序返回全部章节
    async fn list_chapters(&self) -> Result<Vec<ChapterRef>, ContentError>;

    /// 按 slug 查找章节，重复 slug 取第一个
    async fn find_chapter(&self, slug: &str) -> Result<Option<ChapterRef>, ContentError> {
        let chapters = self.list_chapters().await?;
        Ok(chapters.into_iter().find(|chapter| chapter.slug() == slug))
    }

    /// 站点元数据
    async fn meta(&self) -> Result<Meta, ContentError>;
}

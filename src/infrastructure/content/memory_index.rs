//! In-Memory Content Index
//!
//! 内容索引在构建期生成，启动时整体加载到内存，运行期只读

use async_trait::async_trait;
use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::application::ports::{ContentError, ContentIndexPort};
use crate::domain::chapter::{ChapterRef, Meta};

/// 内容索引文件格式
///
/// ```toml
/// [meta]
/// title = "Field Notes"
///
/// [meta.body]
/// raw = "A short book about birds."
///
/// [[chapters]]
/// slug = "intro"
/// title = "Introduction"
/// index = 1
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ContentIndexFile {
    pub meta: Meta,
    #[serde(default)]
    pub chapters: Vec<ChapterRef>,
}

/// 内存内容索引
pub struct InMemoryContentIndex {
    meta: Meta,
    chapters: Vec<ChapterRef>,
}

impl InMemoryContentIndex {
    pub fn new(meta: Meta, chapters: Vec<ChapterRef>) -> Self {
        Self { meta, chapters }
    }

    /// 从 TOML 文本解析
    pub fn from_toml_str(source: &str) -> Result<Self, ContentError> {
        let file: ContentIndexFile =
            toml::from_str(source).map_err(|e| ContentError::ParseError(e.to_string()))?;

        warn_duplicate_slugs(&file.chapters);

        Ok(Self::new(file.meta, file.chapters))
    }

    /// 从 TOML 文件加载
    pub async fn load(path: &Path) -> Result<Self, ContentError> {
        let source = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ContentError::ReadError(format!("{}: {}", path.display(), e)))?;

        let index = Self::from_toml_str(&source)?;
        tracing::info!(
            path = %path.display(),
            chapters = index.chapters.len(),
            title = %index.meta.title,
            "Content index loaded"
        );
        Ok(index)
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }
}

/// 重复 slug 不拒绝，导航按最左侧匹配
fn warn_duplicate_slugs(chapters: &[ChapterRef]) {
    let mut seen = HashSet::new();
    for chapter in chapters {
        if !seen.insert(chapter.slug()) {
            tracing::warn!(slug = %chapter.slug(), "Duplicate chapter slug in content index");
        }
    }
}

#[async_trait]
impl ContentIndexPort for InMemoryContentIndex {
    async fn list_chapters(&self) -> Result<Vec<ChapterRef>, ContentError> {
        Ok(self.chapters.clone())
    }

    async fn meta(&self) -> Result<Meta, ContentError> {
        Ok(self.meta.clone())
    }
}

//! Chapter Context - Entities

use serde::{Deserialize, Serialize};

/// 章节引用
///
/// 不变量:
/// - slug 在内容索引中唯一（由内容源保证，此处不校验）
/// - index 只是位置标记，不参与排序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterRef {
    slug: String,
    title: String,
    #[serde(default)]
    index: i64,
}

impl ChapterRef {
    pub fn new(slug: impl Into<String>, title: impl Into<String>, index: i64) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            index,
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn index(&self) -> i64 {
        self.index
    }

    /// 站内链接路径
    pub fn href(&self) -> String {
        format!("/{}", self.slug)
    }
}

/// 正文原文
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaBody {
    pub raw: String,
}

/// 站点元数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub title: String,
    #[serde(default)]
    pub body: MetaBody,
}

impl Meta {
    pub fn new(title: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: MetaBody { raw: raw.into() },
        }
    }
}

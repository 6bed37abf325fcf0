//! Share Context - Value Objects

use serde::{Deserialize, Serialize};

use crate::domain::chapter::Meta;

/// 分享数据，每次分享尝试重新构造，不持久化
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareData {
    pub title: String,
    pub url: String,
    pub text: String,
}

impl ShareData {
    pub fn new(title: impl Into<String>, url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            text: text.into(),
        }
    }

    /// 从站点元数据构造，正文原文作为分享文本
    pub fn from_meta(meta: &Meta, url: impl Into<String>) -> Self {
        Self::new(meta.title.clone(), url, meta.body.raw.clone())
    }
}

/// 分享成功时使用的途径
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareMethod {
    Share,
    Clipboard,
}

impl ShareMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShareMethod::Share => "share",
            ShareMethod::Clipboard => "clipboard",
        }
    }
}

impl std::fmt::Display for ShareMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_data_from_meta() {
        let meta = Meta::new("A Book", "# Preface");
        let data = ShareData::from_meta(&meta, "https://example.com/intro");
        assert_eq!(data.title, "A Book");
        assert_eq!(data.url, "https://example.com/intro");
        assert_eq!(data.text, "# Preface");
    }

    #[test]
    fn test_share_method_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ShareMethod::Clipboard).unwrap(), "\"clipboard\"");
        assert_eq!(ShareMethod::Share.to_string(), "share");
    }
}

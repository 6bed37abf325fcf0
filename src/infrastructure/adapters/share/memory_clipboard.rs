//! In-Memory Clipboard - 进程内剪贴板
//!
//! 服务端没有系统剪贴板，写入的文本保存在内存中，
//! 由 HTTP 响应带回客户端

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{ClipboardPort, HostError};

pub struct InMemoryClipboard {
    contents: RwLock<Option<String>>,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self {
            contents: RwLock::new(None),
        }
    }

    /// 最近一次写入的文本
    pub async fn contents(&self) -> Option<String> {
        self.contents.read().await.clone()
    }
}

impl Default for InMemoryClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardPort for InMemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), HostError> {
        *self.contents.write().await = Some(text.to_string());
        tracing::debug!(text = %text, "Clipboard written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_last_write_wins() {
        let clipboard = InMemoryClipboard::new();
        assert!(clipboard.contents().await.is_none());

        clipboard.write_text("https://a.example/one").await.unwrap();
        clipboard.write_text("https://a.example/two").await.unwrap();

        assert_eq!(clipboard.contents().await.as_deref(), Some("https://a.example/two"));
    }
}

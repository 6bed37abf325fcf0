//! Recording Native Share - 用于本地开发和测试的原生分享
//!
//! 不调用任何外部服务，只记录分享内容；可配置为始终拒绝

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{HostError, NativeSharePort};
use crate::domain::share::ShareData;

pub struct RecordingNativeShare {
    /// 设置后每次分享都以该原因拒绝
    reject_reason: Option<String>,
    shared: RwLock<Vec<ShareData>>,
}

impl RecordingNativeShare {
    pub fn new() -> Self {
        Self {
            reject_reason: None,
            shared: RwLock::new(Vec::new()),
        }
    }

    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            reject_reason: Some(reason.into()),
            shared: RwLock::new(Vec::new()),
        }
    }

    /// 已成功分享的内容
    pub async fn shared(&self) -> Vec<ShareData> {
        self.shared.read().await.clone()
    }
}

impl Default for RecordingNativeShare {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NativeSharePort for RecordingNativeShare {
    async fn share(&self, data: &ShareData) -> Result<(), HostError> {
        if let Some(reason) = &self.reject_reason {
            return Err(HostError::Rejected(reason.clone()));
        }

        tracing::info!(title = %data.title, url = %data.url, "RecordingNativeShare: shared");
        self.shared.write().await.push(data.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_shares() {
        let native = RecordingNativeShare::new();
        let data = ShareData::new("T", "https://x/y", "B");

        native.share(&data).await.unwrap();

        assert_eq!(native.shared().await, vec![data]);
    }

    #[tokio::test]
    async fn test_rejecting_records_nothing() {
        let native = RecordingNativeShare::rejecting("dismissed");
        let result = native.share(&ShareData::new("T", "https://x/y", "B")).await;

        assert!(matches!(result, Err(HostError::Rejected(reason)) if reason == "dismissed"));
        assert!(native.shared().await.is_empty());
    }
}

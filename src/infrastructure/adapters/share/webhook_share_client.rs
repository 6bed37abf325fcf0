//! Webhook Share Client - 通过 HTTP webhook 实现原生分享
//!
//! 实现 NativeSharePort，把分享数据 POST 到配置的 webhook
//!
//! Request: {"title": "...", "url": "...", "text": "..."}  (JSON)
//! 任意 2xx 视为分享成功

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{HostError, NativeSharePort};
use crate::domain::share::ShareData;

/// Webhook 客户端配置
#[derive(Debug, Clone)]
pub struct WebhookShareClientConfig {
    /// webhook 地址
    pub url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl WebhookShareClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: 10,
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

pub struct WebhookShareClient {
    client: Client,
    config: WebhookShareClientConfig,
}

impl WebhookShareClient {
    pub fn new(config: WebhookShareClientConfig) -> Result<Self, HostError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| HostError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl NativeSharePort for WebhookShareClient {
    async fn share(&self, data: &ShareData) -> Result<(), HostError> {
        tracing::debug!(webhook = %self.config.url, url = %data.url, "Sending share webhook");

        let response = self
            .client
            .post(&self.config.url)
            .json(data)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    HostError::Timeout
                } else {
                    HostError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HostError::Rejected(format!("HTTP {}: {}", status.as_u16(), body)));
        }

        tracing::info!(webhook = %self.config.url, url = %data.url, "Share webhook delivered");
        Ok(())
    }
}

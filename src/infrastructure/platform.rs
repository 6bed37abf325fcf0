//! Share Platform Wiring - 按配置组装宿主分享能力

use std::sync::Arc;

use crate::application::HostError;
use crate::config::{NativeShareMode, ShareConfig};
use crate::infrastructure::adapters::{
    HostSharePlatform, InMemoryClipboard, RecordingNativeShare, WebhookShareClient,
    WebhookShareClientConfig,
};

/// 按配置组装 HostSharePlatform
pub fn build_share_platform(config: &ShareConfig) -> Result<HostSharePlatform, HostError> {
    let mut platform = HostSharePlatform::unavailable();

    match config.native {
        NativeShareMode::None => {}
        NativeShareMode::Recording => {
            platform = platform.with_native_share(Arc::new(RecordingNativeShare::new()));
        }
        NativeShareMode::Webhook => {
            let url = config
                .webhook_url
                .clone()
                .ok_or_else(|| HostError::Rejected("share.webhook_url is not set".to_string()))?;
            let client_config =
                WebhookShareClientConfig::new(url).with_timeout(config.webhook_timeout_secs);
            platform = platform.with_native_share(Arc::new(WebhookShareClient::new(client_config)?));
        }
    }

    if config.clipboard {
        platform = platform.with_clipboard(Arc::new(InMemoryClipboard::new()));
    }

    Ok(platform)
}

//! Share Platform Port - 宿主分享能力抽象
//!
//! 原生分享和剪贴板写入都由宿主注入，调度器不做全局探测

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::share::ShareData;

/// 宿主能力调用失败（用户取消、权限拒绝、网络错误等）
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Share rejected: {0}")]
    Rejected(String),

    #[error("Share cancelled")]
    Cancelled,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,
}

/// 原生分享能力
#[async_trait]
pub trait NativeSharePort: Send + Sync {
    async fn share(&self, data: &ShareData) -> Result<(), HostError>;
}

/// 剪贴板写入能力
#[async_trait]
pub trait ClipboardPort: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), HostError>;
}

/// Share Platform Port
///
/// 每项能力可用或不可用，两者都不可用是合法状态
pub trait SharePlatformPort: Send + Sync {
    fn native_share(&self) -> Option<&dyn NativeSharePort>;

    fn clipboard(&self) -> Option<&dyn ClipboardPort>;

    /// 按固定优先级选出首个可用能力
    fn capability(&self) -> ShareCapability<'_> {
        if let Some(share) = self.native_share() {
            ShareCapability::NativeShare(share)
        } else if let Some(clipboard) = self.clipboard() {
            ShareCapability::ClipboardWrite(clipboard)
        } else {
            ShareCapability::Unavailable
        }
    }
}

/// 当前可用的最高优先级能力
pub enum ShareCapability<'a> {
    NativeShare(&'a dyn NativeSharePort),
    ClipboardWrite(&'a dyn ClipboardPort),
    Unavailable,
}

impl ShareCapability<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            ShareCapability::NativeShare(_) => "native_share",
            ShareCapability::ClipboardWrite(_) => "clipboard_write",
            ShareCapability::Unavailable => "unavailable",
        }
    }
}

//! Share-Or-Copy Dispatcher
//!
//! 按固定优先级尝试：原生分享 -> 剪贴板（仅写入 url）-> 失败回调。
//! 能力缺失不是错误，是正常分支；宿主调用失败的处理由 [`FailurePolicy`] 决定。

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::ports::{ClipboardPort, HostError, ShareCapability, SharePlatformPort};
use crate::domain::share::{ShareData, ShareMethod};

/// 成功回调，最多调用一次
pub type OnShareSuccess<'a> = Box<dyn FnOnce(&ShareData, ShareMethod) + Send + 'a>;

/// 失败回调，最多调用一次
pub type OnShareFail<'a> = Box<dyn FnOnce(Option<&ShareData>) + Send + 'a>;

/// 宿主调用失败时的处理策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// 原生分享失败降级到剪贴板，剪贴板也失败则走失败回调
    #[default]
    Degrade,
    /// 旧行为：宿主失败直接返回给调用方，不触发任何回调
    Propagate,
}

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("{method} failed: {source}")]
    Host {
        method: ShareMethod,
        #[source]
        source: HostError,
    },
}

/// 本次调度实际走的分支
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareOutcome {
    /// 原生分享成功
    Shared,
    /// 链接已写入剪贴板
    Copied,
    /// 调用了失败回调
    Failed,
    /// 无可用能力且没有失败回调
    Skipped,
}

impl ShareOutcome {
    pub fn method(&self) -> Option<ShareMethod> {
        match self {
            ShareOutcome::Shared => Some(ShareMethod::Share),
            ShareOutcome::Copied => Some(ShareMethod::Clipboard),
            ShareOutcome::Failed | ShareOutcome::Skipped => None,
        }
    }
}

/// Share-Or-Copy 调度器
///
/// 无内部可变状态，并发调用互不影响
#[derive(Clone)]
pub struct ShareDispatcher {
    platform: Arc<dyn SharePlatformPort>,
    policy: FailurePolicy,
}

impl ShareDispatcher {
    pub fn new(platform: Arc<dyn SharePlatformPort>, policy: FailurePolicy) -> Self {
        Self { platform, policy }
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// 分享或复制链接
    ///
    /// `Degrade` 策略下永不返回 `Err`
    pub async fn share_or_copy(
        &self,
        data: ShareData,
        on_success: OnShareSuccess<'_>,
        on_fail: Option<OnShareFail<'_>>,
    ) -> Result<ShareOutcome, ShareError> {
        let capability = self.platform.capability();
        tracing::debug!(
            capability = capability.name(),
            url = %data.url,
            "Dispatching share"
        );

        match capability {
            ShareCapability::NativeShare(share) => match share.share(&data).await {
                Ok(()) => {
                    on_success(&data, ShareMethod::Share);
                    Ok(ShareOutcome::Shared)
                }
                Err(e) => {
                    if self.policy == FailurePolicy::Propagate {
                        return Err(ShareError::Host {
                            method: ShareMethod::Share,
                            source: e,
                        });
                    }
                    tracing::warn!(error = %e, url = %data.url, "Native share failed, falling back");
                    match self.platform.clipboard() {
                        Some(clipboard) => self.copy(clipboard, data, on_success, on_fail).await,
                        None => Ok(Self::fail(&data, on_fail)),
                    }
                }
            },
            ShareCapability::ClipboardWrite(clipboard) => {
                self.copy(clipboard, data, on_success, on_fail).await
            }
            ShareCapability::Unavailable => Ok(Self::fail(&data, on_fail)),
        }
    }

    async fn copy(
        &self,
        clipboard: &dyn ClipboardPort,
        data: ShareData,
        on_success: OnShareSuccess<'_>,
        on_fail: Option<OnShareFail<'_>>,
    ) -> Result<ShareOutcome, ShareError> {
        match clipboard.write_text(&data.url).await {
            Ok(()) => {
                on_success(&data, ShareMethod::Clipboard);
                Ok(ShareOutcome::Copied)
            }
            Err(e) if self.policy == FailurePolicy::Propagate => Err(ShareError::Host {
                method: ShareMethod::Clipboard,
                source: e,
            }),
            Err(e) => {
                tracing::warn!(error = %e, url = %data.url, "Clipboard write failed");
                Ok(Self::fail(&data, on_fail))
            }
        }
    }

    fn fail(data: &ShareData, on_fail: Option<OnShareFail<'_>>) -> ShareOutcome {
        match on_fail {
            Some(on_fail) => {
                on_fail(Some(data));
                ShareOutcome::Failed
            }
            None => ShareOutcome::Skipped,
        }
    }
}

//! Share Meta Action - 绑定提示输出的分享动作
//!
//! 构造时一次性捕获 notifier、调度器和页面数据，
//! 之后 `execute()` 可直接作为按钮点击处理。

use std::sync::Arc;

use crate::application::ports::{NotifierPort, Toast};
use crate::domain::chapter::Meta;
use crate::domain::share::{ShareData, ShareMethod};

use super::dispatcher::{ShareDispatcher, ShareError, ShareOutcome};

pub const LINK_COPIED_TITLE: &str = "Link Copied";
pub const SHARE_FAILED_TITLE: &str = "Could not share";
pub const SHARE_FAILED_DESCRIPTION: &str =
    "It seems like your browser does not support sharing or copying links.";

/// 分享页面元数据的动作
pub struct ShareMetaAction {
    dispatcher: ShareDispatcher,
    notifier: Arc<dyn NotifierPort>,
    data: ShareData,
}

impl ShareMetaAction {
    pub fn new(
        dispatcher: ShareDispatcher,
        notifier: Arc<dyn NotifierPort>,
        meta: &Meta,
        url: impl Into<String>,
    ) -> Self {
        Self {
            dispatcher,
            notifier,
            data: ShareData::from_meta(meta, url),
        }
    }

    pub fn data(&self) -> &ShareData {
        &self.data
    }

    /// 执行分享
    ///
    /// 剪贴板成功提示 "Link Copied"，完全失败提示 "Could not share"，
    /// 原生分享成功不提示（系统分享面板已是反馈）
    pub async fn execute(&self) -> Result<ShareOutcome, ShareError> {
        let notifier = &self.notifier;

        let outcome = self
            .dispatcher
            .share_or_copy(
                self.data.clone(),
                Box::new(move |_: &ShareData, method: ShareMethod| {
                    if method == ShareMethod::Clipboard {
                        notifier.notify(Toast::new(LINK_COPIED_TITLE));
                    }
                }),
                Some(Box::new(move |_: Option<&ShareData>| {
                    notifier.notify(
                        Toast::new(SHARE_FAILED_TITLE).with_description(SHARE_FAILED_DESCRIPTION),
                    );
                })),
            )
            .await?;

        tracing::info!(url = %self.data.url, outcome = ?outcome, "Share action completed");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::share::FailurePolicy;
    use crate::infrastructure::adapters::{
        CollectingNotifier, HostSharePlatform, InMemoryClipboard, RecordingNativeShare,
    };

    fn meta() -> Meta {
        Meta::new("Field Notes", "A short book about birds.")
    }

    fn action(platform: HostSharePlatform, notifier: Arc<CollectingNotifier>) -> ShareMetaAction {
        let dispatcher = ShareDispatcher::new(Arc::new(platform), FailurePolicy::Degrade);
        ShareMetaAction::new(dispatcher, notifier, &meta(), "https://example.com/intro")
    }

    #[test]
    fn test_action_builds_share_data_from_meta() {
        let notifier = Arc::new(CollectingNotifier::new());
        let action = action(HostSharePlatform::unavailable(), notifier);
        assert_eq!(
            action.data(),
            &ShareData::new(
                "Field Notes",
                "https://example.com/intro",
                "A short book about birds."
            )
        );
    }

    #[tokio::test]
    async fn test_clipboard_success_notifies_link_copied() {
        let clipboard = Arc::new(InMemoryClipboard::new());
        let notifier = Arc::new(CollectingNotifier::new());
        let platform = HostSharePlatform::unavailable().with_clipboard(clipboard.clone());

        let outcome = action(platform, notifier.clone()).execute().await.unwrap();

        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(clipboard.contents().await.as_deref(), Some("https://example.com/intro"));
        assert_eq!(notifier.toasts(), vec![Toast::new(LINK_COPIED_TITLE)]);
    }

    #[tokio::test]
    async fn test_native_share_success_is_silent() {
        let native = Arc::new(RecordingNativeShare::new());
        let notifier = Arc::new(CollectingNotifier::new());
        let platform = HostSharePlatform::unavailable().with_native_share(native.clone());

        let outcome = action(platform, notifier.clone()).execute().await.unwrap();

        assert_eq!(outcome, ShareOutcome::Shared);
        assert_eq!(native.shared().await.len(), 1);
        assert!(notifier.toasts().is_empty());
    }

    #[tokio::test]
    async fn test_no_capability_notifies_failure() {
        let notifier = Arc::new(CollectingNotifier::new());

        let outcome = action(HostSharePlatform::unavailable(), notifier.clone())
            .execute()
            .await
            .unwrap();

        assert_eq!(outcome, ShareOutcome::Failed);
        assert_eq!(
            notifier.toasts(),
            vec![Toast::new(SHARE_FAILED_TITLE).with_description(SHARE_FAILED_DESCRIPTION)]
        );
    }

    #[tokio::test]
    async fn test_rejected_share_falls_back_to_clipboard_toast() {
        let native = Arc::new(RecordingNativeShare::rejecting("user dismissed the sheet"));
        let clipboard = Arc::new(InMemoryClipboard::new());
        let notifier = Arc::new(CollectingNotifier::new());
        let platform = HostSharePlatform::unavailable()
            .with_native_share(native)
            .with_clipboard(clipboard.clone());

        let outcome = action(platform, notifier.clone()).execute().await.unwrap();

        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(notifier.toasts(), vec![Toast::new(LINK_COPIED_TITLE)]);
    }
}

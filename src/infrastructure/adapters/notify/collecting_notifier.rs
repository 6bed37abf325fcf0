//! Collecting Notifier - 收集提示消息
//!
//! 每个请求一个实例，收集到的 toast 随响应返回客户端

use std::sync::Mutex;

use crate::application::ports::{NotifierPort, Toast};

#[derive(Default)]
pub struct CollectingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl CollectingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .map(|toasts| toasts.clone())
            .unwrap_or_default()
    }
}

impl NotifierPort for CollectingNotifier {
    fn notify(&self, toast: Toast) {
        tracing::info!(
            title = %toast.title,
            description = ?toast.description,
            "Toast"
        );
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push(toast);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_in_order() {
        let notifier = CollectingNotifier::new();
        notifier.notify(Toast::new("first"));
        notifier.notify(Toast::new("second").with_description("details"));

        let toasts = notifier.toasts();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].title, "first");
        assert_eq!(toasts[1].description.as_deref(), Some("details"));
    }
}

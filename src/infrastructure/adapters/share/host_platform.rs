//! Host Share Platform - 组合可选的原生分享和剪贴板能力

use std::sync::Arc;

use crate::application::ports::{ClipboardPort, NativeSharePort, SharePlatformPort};

pub struct HostSharePlatform {
    native: Option<Arc<dyn NativeSharePort>>,
    clipboard: Option<Arc<dyn ClipboardPort>>,
}

impl HostSharePlatform {
    pub fn new(
        native: Option<Arc<dyn NativeSharePort>>,
        clipboard: Option<Arc<dyn ClipboardPort>>,
    ) -> Self {
        Self { native, clipboard }
    }

    /// 两种能力都不可用
    pub fn unavailable() -> Self {
        Self::new(None, None)
    }

    pub fn with_native_share(mut self, native: Arc<dyn NativeSharePort>) -> Self {
        self.native = Some(native);
        self
    }

    pub fn with_clipboard(mut self, clipboard: Arc<dyn ClipboardPort>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }
}

impl SharePlatformPort for HostSharePlatform {
    fn native_share(&self) -> Option<&dyn NativeSharePort> {
        self.native.as_deref()
    }

    fn clipboard(&self) -> Option<&dyn ClipboardPort> {
        self.clipboard.as_deref()
    }
}

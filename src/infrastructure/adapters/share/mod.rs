//! Share Adapters - 宿主分享能力实现

mod host_platform;
mod memory_clipboard;
mod recording_native_share;
mod webhook_share_client;

pub use host_platform::HostSharePlatform;
pub use memory_clipboard::InMemoryClipboard;
pub use recording_native_share::RecordingNativeShare;
pub use webhook_share_client::{WebhookShareClient, WebhookShareClientConfig};

//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod content_index;
mod notifier;
mod share_platform;

pub use content_index::{ContentError, ContentIndexPort};
pub use notifier::{NotifierPort, Toast};
pub use share_platform::{
    ClipboardPort, HostError, NativeSharePort, ShareCapability, SharePlatformPort,
};

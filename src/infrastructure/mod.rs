//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod adapters;
pub mod content;
pub mod http;
pub mod platform;

pub use content::InMemoryContentIndex;
pub use platform::build_share_platform;

//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Chapter Context: 章节导航与目录
//! - Share Context: 分享数据
//!
//! 以及共享的 URL 构造和断言工具

pub mod chapter;
pub mod share;

mod guard;
mod request_url;

pub use guard::{invariant, invariant_with, InvariantError};
pub use request_url::{build_request_url, UrlError};

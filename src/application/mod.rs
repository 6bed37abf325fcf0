//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（ContentIndex、SharePlatform、Notifier）
//! - share: Share-Or-Copy 调度与分享动作
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod share;

// Re-exports
pub use commands::{
    handlers::{ShareChapterHandler, ShareChapterResponse},
    ShareChapter,
};

pub use error::ApplicationError;

pub use ports::{
    ClipboardPort, ContentError, ContentIndexPort, HostError, NativeSharePort, NotifierPort,
    ShareCapability, SharePlatformPort, Toast,
};

pub use queries::{
    handlers::{
        ChapterPageResponse, GetChapterNavigationHandler, GetChapterPageHandler, GetMetaHandler,
        ListChaptersHandler,
    },
    GetChapterNavigation, GetChapterPage, GetMeta, ListChapters,
};

pub use share::{FailurePolicy, ShareDispatcher, ShareError, ShareMetaAction, ShareOutcome};

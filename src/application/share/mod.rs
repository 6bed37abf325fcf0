//! 分享用例
//!
//! - dispatcher: Share-Or-Copy 调度
//! - action: 绑定提示输出的分享动作

mod action;
mod dispatcher;

pub use action::{
    ShareMetaAction, LINK_COPIED_TITLE, SHARE_FAILED_DESCRIPTION, SHARE_FAILED_TITLE,
};
pub use dispatcher::{
    FailurePolicy, OnShareFail, OnShareSuccess, ShareDispatcher, ShareError, ShareOutcome,
};

//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：触发宿主副作用的操作

mod share_commands;

pub mod handlers;

pub use share_commands::*;

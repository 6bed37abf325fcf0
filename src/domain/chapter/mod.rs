//! Chapter Context - 章节限界上下文
//!
//! 职责:
//! - 章节引用与站点元数据
//! - 上一章/下一章解析
//! - 章节目录

mod entities;
mod listing;
mod navigation;

pub use entities::{ChapterRef, Meta, MetaBody};
pub use listing::{chapter_listing, ChapterListEntry};
pub use navigation::{
    resolve_navigation, resolve_navigation_by_slug, slug_chapter_index, ChapterNavigation,
};

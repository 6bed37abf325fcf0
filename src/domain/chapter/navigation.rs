//! Chapter Navigation - 章节前后导航解析
//!
//! 基于有序章节列表和当前章节计算上一章/下一章。
//! 列表顺序由内容源决定，只按 slug 匹配当前章节。

use serde::Serialize;

use super::ChapterRef;

/// 导航结果（上一章，下一章）
///
/// 任一端可能为空：首章、末章、或当前章节不在列表中
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChapterNavigation {
    previous: Option<ChapterRef>,
    next: Option<ChapterRef>,
}

impl ChapterNavigation {
    pub fn new(previous: Option<ChapterRef>, next: Option<ChapterRef>) -> Self {
        Self { previous, next }
    }

    pub fn previous(&self) -> Option<&ChapterRef> {
        self.previous.as_ref()
    }

    pub fn next(&self) -> Option<&ChapterRef> {
        self.next.as_ref()
    }

    pub fn into_pair(self) -> (Option<ChapterRef>, Option<ChapterRef>) {
        (self.previous, self.next)
    }
}

/// 按 slug 查找章节位置，重复 slug 取最左侧
pub fn slug_chapter_index(slug: &str, chapters: &[ChapterRef]) -> Option<usize> {
    chapters.iter().position(|chapter| chapter.slug() == slug)
}

/// 计算当前章节的前后导航
///
/// 当前章节为空或未命中时视为位置 -1：上一章为空，下一章为首章。
/// 越界不是错误，对应端返回 None。
pub fn resolve_navigation(current: Option<&ChapterRef>, chapters: &[ChapterRef]) -> ChapterNavigation {
    resolve_navigation_by_slug(current.map(ChapterRef::slug), chapters)
}

/// 同 [`resolve_navigation`]，直接使用 slug
///
/// 空 slug 等同于没有当前章节
pub fn resolve_navigation_by_slug(slug: Option<&str>, chapters: &[ChapterRef]) -> ChapterNavigation {
    let position = slug
        .filter(|slug| !slug.is_empty())
        .and_then(|slug| slug_chapter_index(slug, chapters));

    let (previous, next) = match position {
        Some(index) => (
            index.checked_sub(1).and_then(|prev| chapters.get(prev)),
            chapters.get(index + 1),
        ),
        None => (None, chapters.first()),
    };

    ChapterNavigation {
        previous: previous.cloned(),
        next: next.cloned(),
    }
}

//! Chapter Listing - 章节目录（移动端抽屉菜单）

use serde::Serialize;

use super::ChapterRef;

/// 目录条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterListEntry {
    pub slug: String,
    pub title: String,
    pub href: String,
    /// 是否为当前阅读章节
    pub is_current: bool,
}

/// 生成完整目录，按 slug 标记当前章节
///
/// 保持内容源顺序；重复 slug 的条目都会被标记
pub fn chapter_listing(current_slug: Option<&str>, chapters: &[ChapterRef]) -> Vec<ChapterListEntry> {
    chapters
        .iter()
        .map(|chapter| ChapterListEntry {
            slug: chapter.slug().to_string(),
            title: chapter.title().to_string(),
            href: chapter.href(),
            is_current: current_slug == Some(chapter.slug()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_marks_current() {
        let chapters = vec![
            ChapterRef::new("one", "One", 1),
            ChapterRef::new("two", "Two", 2),
        ];
        let listing = chapter_listing(Some("two"), &chapters);

        assert_eq!(listing.len(), 2);
        assert!(!listing[0].is_current);
        assert!(listing[1].is_current);
        assert_eq!(listing[1].href, "/two");
    }

    #[test]
    fn test_listing_without_current() {
        let chapters = vec![ChapterRef::new("one", "One", 1)];
        let listing = chapter_listing(None, &chapters);
        assert!(listing.iter().all(|entry| !entry.is_current));
    }
}

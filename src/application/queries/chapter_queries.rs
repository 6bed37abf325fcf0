//! Chapter Queries

/// 列出章节目录查询
#[derive(Debug, Clone, Default)]
pub struct ListChapters {
    /// 当前阅读章节，用于标记目录高亮
    pub current_slug: Option<String>,
}

/// 获取前后导航查询
///
/// current_slug 为空时返回落地页导航（下一章为首章）
#[derive(Debug, Clone, Default)]
pub struct GetChapterNavigation {
    pub current_slug: Option<String>,
}

/// 获取章节页查询
#[derive(Debug, Clone)]
pub struct GetChapterPage {
    pub slug: String,
    /// 构造 canonical URL 使用的 host
    pub host: String,
}

/// 获取站点元数据查询
#[derive(Debug, Clone)]
pub struct GetMeta;

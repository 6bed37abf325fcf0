//! Share Commands

/// 分享章节（或站点首页）命令
#[derive(Debug, Clone)]
pub struct ShareChapter {
    /// 为空时分享站点首页
    pub slug: Option<String>,
    /// 构造分享链接使用的 host
    pub host: String,
}

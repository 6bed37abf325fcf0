//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::{ChapterPageResponse, ShareOutcome, Toast};
use crate::domain::chapter::{ChapterNavigation, ChapterRef, Meta};
use crate::domain::share::{ShareData, ShareMethod};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Chapter DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ListChaptersParams {
    pub current: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NavigationRequest {
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GetChapterRequest {
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Serialize)]
pub struct ChapterResponse {
    pub slug: String,
    pub title: String,
    pub index: i64,
    pub href: String,
}

impl From<&ChapterRef> for ChapterResponse {
    fn from(chapter: &ChapterRef) -> Self {
        Self {
            slug: chapter.slug().to_string(),
            title: chapter.title().to_string(),
            index: chapter.index(),
            href: chapter.href(),
        }
    }
}

/// 前后导航，缺失的一端为 null（对应禁用的按钮）
#[derive(Debug, Serialize)]
pub struct NavigationResponse {
    pub previous: Option<ChapterResponse>,
    pub next: Option<ChapterResponse>,
}

impl From<&ChapterNavigation> for NavigationResponse {
    fn from(navigation: &ChapterNavigation) -> Self {
        Self {
            previous: navigation.previous().map(ChapterResponse::from),
            next: navigation.next().map(ChapterResponse::from),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChapterPageDto {
    pub chapter: ChapterResponse,
    pub navigation: NavigationResponse,
    pub canonical_url: String,
}

impl From<ChapterPageResponse> for ChapterPageDto {
    fn from(page: ChapterPageResponse) -> Self {
        Self {
            chapter: ChapterResponse::from(&page.chapter),
            navigation: NavigationResponse::from(&page.navigation),
            canonical_url: page.canonical_url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MetaResponse {
    pub title: String,
    pub body: String,
}

impl From<Meta> for MetaResponse {
    fn from(meta: Meta) -> Self {
        Self {
            title: meta.title,
            body: meta.body.raw,
        }
    }
}

// ============================================================================
// Share DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ShareRequest {
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub outcome: ShareOutcome,
    pub method: Option<ShareMethod>,
    pub data: ShareData,
    pub toasts: Vec<Toast>,
}

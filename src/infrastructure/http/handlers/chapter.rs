//! Chapter HTTP Handlers

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};
use std::sync::Arc;

use crate::application::{GetChapterNavigation, GetChapterPage, GetMeta, ListChapters};
use crate::domain::chapter::ChapterListEntry;
use crate::infrastructure::http::dto::{
    ApiResponse, ChapterPageDto, GetChapterRequest, ListChaptersParams, MetaResponse,
    NavigationRequest, NavigationResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::invariant::invariant_response;
use crate::infrastructure::http::state::AppState;

/// 章节目录（移动端抽屉菜单）
pub async fn list_chapters(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListChaptersParams>,
) -> Result<Json<ApiResponse<Vec<ChapterListEntry>>>, ApiError> {
    let query = ListChapters {
        current_slug: params.current,
    };
    let listing = state.list_chapters_handler.handle(query).await?;
    Ok(Json(ApiResponse::success(listing)))
}

/// 落地页导航："开始阅读" 指向首章
pub async fn start_navigation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<NavigationResponse>>, ApiError> {
    let navigation = state
        .get_navigation_handler
        .handle(GetChapterNavigation::default())
        .await?;
    Ok(Json(ApiResponse::success(NavigationResponse::from(&navigation))))
}

/// 指定章节的前后导航
pub async fn chapter_navigation(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NavigationRequest>,
) -> Result<Json<ApiResponse<NavigationResponse>>, ApiError> {
    let query = GetChapterNavigation {
        current_slug: req.slug,
    };
    let navigation = state.get_navigation_handler.handle(query).await?;
    Ok(Json(ApiResponse::success(NavigationResponse::from(&navigation))))
}

/// 章节页：章节、导航、canonical URL
pub async fn get_chapter(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<GetChapterRequest>,
) -> Result<Json<ApiResponse<ChapterPageDto>>, ApiError> {
    invariant_response(!req.slug.trim().is_empty(), "slug is required", None)?;

    let query = GetChapterPage {
        slug: req.slug,
        host: state.host_resolver.resolve(&headers),
    };
    let page = state.get_chapter_page_handler.handle(query).await?;
    Ok(Json(ApiResponse::success(ChapterPageDto::from(page))))
}

/// 站点元数据
pub async fn get_meta(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<MetaResponse>>, ApiError> {
    let meta = state.get_meta_handler.handle(GetMeta).await?;
    Ok(Json(ApiResponse::success(MetaResponse::from(meta))))
}

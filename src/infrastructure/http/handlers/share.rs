//! Share HTTP Handler

use axum::{extract::State, http::HeaderMap, Json};
use std::sync::Arc;

use crate::application::ShareChapter;
use crate::infrastructure::adapters::CollectingNotifier;
use crate::infrastructure::http::dto::{ApiResponse, ShareRequest, ShareResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 分享章节或首页，提示消息随响应返回
pub async fn share(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<ShareRequest>,
) -> Result<Json<ApiResponse<ShareResponse>>, ApiError> {
    let notifier = Arc::new(CollectingNotifier::new());
    let command = ShareChapter {
        slug: req.slug,
        host: state.host_resolver.resolve(&headers),
    };

    let result = state
        .share_chapter_handler
        .handle(command, notifier.clone())
        .await?;

    Ok(Json(ApiResponse::success(ShareResponse {
        outcome: result.outcome,
        method: result.outcome.method(),
        data: result.data,
        toasts: notifier.toasts(),
    })))
}

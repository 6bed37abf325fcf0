//! Share Command Handlers

use std::sync::Arc;

use crate::application::commands::ShareChapter;
use crate::application::error::ApplicationError;
use crate::application::ports::{ContentIndexPort, NotifierPort};
use crate::application::share::{ShareDispatcher, ShareMetaAction, ShareOutcome};
use crate::domain::build_request_url;
use crate::domain::share::ShareData;

/// 分享结果
#[derive(Debug, Clone)]
pub struct ShareChapterResponse {
    pub outcome: ShareOutcome,
    pub data: ShareData,
}

/// ShareChapter Handler
pub struct ShareChapterHandler {
    content: Arc<dyn ContentIndexPort>,
    dispatcher: ShareDispatcher,
}

impl ShareChapterHandler {
    pub fn new(content: Arc<dyn ContentIndexPort>, dispatcher: ShareDispatcher) -> Self {
        Self {
            content,
            dispatcher,
        }
    }

    /// 分享并把提示消息写入 notifier
    pub async fn handle(
        &self,
        command: ShareChapter,
        notifier: Arc<dyn NotifierPort>,
    ) -> Result<ShareChapterResponse, ApplicationError> {
        let route = match command.slug.as_deref().filter(|slug| !slug.is_empty()) {
            Some(slug) => self
                .content
                .find_chapter(slug)
                .await?
                .ok_or_else(|| ApplicationError::not_found("Chapter", slug))?
                .href(),
            None => "/".to_string(),
        };

        let url = build_request_url(&command.host, Some(&route))?;
        let meta = self.content.meta().await?;

        let action = ShareMetaAction::new(self.dispatcher.clone(), notifier, &meta, url);
        let outcome = action.execute().await?;

        Ok(ShareChapterResponse {
            outcome,
            data: action.data().clone(),
        })
    }
}

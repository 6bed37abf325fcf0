//! Chapter Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::ContentIndexPort;
use crate::application::queries::{GetChapterNavigation, GetChapterPage, GetMeta, ListChapters};
use crate::domain::chapter::{
    chapter_listing, resolve_navigation, resolve_navigation_by_slug, ChapterListEntry,
    ChapterNavigation, ChapterRef, Meta,
};
use crate::domain::{build_request_url, invariant};

// ============================================================================
// Response DTOs
// ============================================================================

/// 章节页响应
#[derive(Debug, Clone)]
pub struct ChapterPageResponse {
    pub chapter: ChapterRef,
    pub navigation: ChapterNavigation,
    pub canonical_url: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// ListChapters Handler
pub struct ListChaptersHandler {
    content: Arc<dyn ContentIndexPort>,
}

impl ListChaptersHandler {
    pub fn new(content: Arc<dyn ContentIndexPort>) -> Self {
        Self { content }
    }

    pub async fn handle(&self, query: ListChapters) -> Result<Vec<ChapterListEntry>, ApplicationError> {
        let chapters = self.content.list_chapters().await?;
        Ok(chapter_listing(query.current_slug.as_deref(), &chapters))
    }
}

/// GetChapterNavigation Handler
pub struct GetChapterNavigationHandler {
    content: Arc<dyn ContentIndexPort>,
}

impl GetChapterNavigationHandler {
    pub fn new(content: Arc<dyn ContentIndexPort>) -> Self {
        Self { content }
    }

    pub async fn handle(
        &self,
        query: GetChapterNavigation,
    ) -> Result<ChapterNavigation, ApplicationError> {
        let chapters = self.content.list_chapters().await?;
        Ok(resolve_navigation_by_slug(
            query.current_slug.as_deref(),
            &chapters,
        ))
    }
}

/// GetChapterPage Handler
pub struct GetChapterPageHandler {
    content: Arc<dyn ContentIndexPort>,
}

impl GetChapterPageHandler {
    pub fn new(content: Arc<dyn ContentIndexPort>) -> Self {
        Self { content }
    }

    pub async fn handle(&self, query: GetChapterPage) -> Result<ChapterPageResponse, ApplicationError> {
        invariant(!query.slug.trim().is_empty(), "Chapter slug is required")?;

        let chapters = self.content.list_chapters().await?;
        let chapter = chapters
            .iter()
            .find(|chapter| chapter.slug() == query.slug)
            .cloned()
            .ok_or_else(|| ApplicationError::not_found("Chapter", &query.slug))?;

        let navigation = resolve_navigation(Some(&chapter), &chapters);
        let canonical_url = build_request_url(&query.host, Some(&chapter.href()))?;

        tracing::debug!(
            slug = %chapter.slug(),
            canonical_url = %canonical_url,
            "Chapter page resolved"
        );

        Ok(ChapterPageResponse {
            chapter,
            navigation,
            canonical_url,
        })
    }
}

/// GetMeta Handler
pub struct GetMetaHandler {
    content: Arc<dyn ContentIndexPort>,
}

impl GetMetaHandler {
    pub fn new(content: Arc<dyn ContentIndexPort>) -> Self {
        Self { content }
    }

    pub async fn handle(&self, _query: GetMeta) -> Result<Meta, ApplicationError> {
        Ok(self.content.meta().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::content::InMemoryContentIndex;

    fn content() -> Arc<dyn ContentIndexPort> {
        Arc::new(InMemoryContentIndex::new(
            Meta::new("Field Notes", "A short book about birds."),
            vec![
                ChapterRef::new("intro", "Introduction", 1),
                ChapterRef::new("sparrows", "Sparrows", 2),
                ChapterRef::new("owls", "Owls", 3),
            ],
        ))
    }

    #[tokio::test]
    async fn test_landing_navigation_starts_at_first_chapter() {
        let handler = GetChapterNavigationHandler::new(content());
        let nav = handler.handle(GetChapterNavigation::default()).await.unwrap();

        assert!(nav.previous().is_none());
        assert_eq!(nav.next().map(ChapterRef::slug), Some("intro"));
    }

    #[tokio::test]
    async fn test_navigation_for_middle_chapter() {
        let handler = GetChapterNavigationHandler::new(content());
        let nav = handler
            .handle(GetChapterNavigation {
                current_slug: Some("sparrows".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(nav.previous().map(ChapterRef::slug), Some("intro"));
        assert_eq!(nav.next().map(ChapterRef::slug), Some("owls"));
    }

    #[tokio::test]
    async fn test_chapter_page_has_canonical_url() {
        let handler = GetChapterPageHandler::new(content());
        let page = handler
            .handle(GetChapterPage {
                slug: "owls".to_string(),
                host: "books.example.com".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(page.chapter.title(), "Owls");
        assert_eq!(page.canonical_url, "https://books.example.com/owls");
        assert_eq!(page.navigation.previous().map(ChapterRef::slug), Some("sparrows"));
        assert!(page.navigation.next().is_none());
    }

    #[tokio::test]
    async fn test_chapter_page_unknown_slug() {
        let handler = GetChapterPageHandler::new(content());
        let result = handler
            .handle(GetChapterPage {
                slug: "eagles".to_string(),
                host: "books.example.com".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_chapter_page_blank_slug_is_invalid() {
        let handler = GetChapterPageHandler::new(content());
        let result = handler
            .handle(GetChapterPage {
                slug: "  ".to_string(),
                host: "books.example.com".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_listing_marks_current_chapter() {
        let handler = ListChaptersHandler::new(content());
        let listing = handler
            .handle(ListChapters {
                current_slug: Some("intro".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(listing.len(), 3);
        assert!(listing[0].is_current);
        assert_eq!(listing.iter().filter(|entry| entry.is_current).count(), 1);
    }

    #[tokio::test]
    async fn test_get_meta() {
        let handler = GetMetaHandler::new(content());
        let meta = handler.handle(GetMeta).await.unwrap();
        assert_eq!(meta.title, "Field Notes");
    }
}

use anyhow::Result;
use async_trait::async_trait;

use crate::bento::ContentInput;
use crate::models::{Article, Classified, Event, PromotionWithCompany};

use super::{ContentFeed, ARTICLE_LIMIT, CLASSIFIED_LIMIT, EVENT_LIMIT, PROMOTION_LIMIT};

/// Feed over fixed vectors. Applies the same caps as the database feed.
pub struct InMemoryFeed {
    content: ContentInput,
}

impl InMemoryFeed {
    pub fn new(content: ContentInput) -> Self {
        Self { content }
    }
}

fn capped<T: Clone>(items: &[T], limit: usize) -> Vec<T> {
    items.iter().take(limit).cloned().collect()
}

#[async_trait]
impl ContentFeed for InMemoryFeed {
    async fn promotions(&self) -> Result<Vec<PromotionWithCompany>> {
        Ok(capped(&self.content.promotions, PROMOTION_LIMIT))
    }

    async fn articles(&self) -> Result<Vec<Article>> {
        Ok(capped(&self.content.articles, ARTICLE_LIMIT))
    }

    async fn events(&self) -> Result<Vec<Event>> {
        Ok(capped(&self.content.events, EVENT_LIMIT))
    }

    async fn classifieds(&self) -> Result<Vec<Classified>> {
        Ok(capped(&self.content.classifieds, CLASSIFIED_LIMIT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bento::fixtures::make_input;

    #[tokio::test]
    async fn test_streams_capped() {
        let feed = InMemoryFeed::new(make_input(15, 9, 7, 8));
        assert_eq!(feed.promotions().await.unwrap().len(), PROMOTION_LIMIT);
        assert_eq!(feed.articles().await.unwrap().len(), ARTICLE_LIMIT);
        assert_eq!(feed.events().await.unwrap().len(), EVENT_LIMIT);
        assert_eq!(feed.classifieds().await.unwrap().len(), CLASSIFIED_LIMIT);
    }
}

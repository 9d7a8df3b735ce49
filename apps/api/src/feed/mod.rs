//! Content Feed — fetches the four homepage streams for the bento engine.
//!
//! `AppState` holds an `Arc<dyn ContentFeed>`. Production uses `PgContentFeed`;
//! tests swap in `InMemoryFeed` without touching handlers.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

use crate::bento::ContentInput;
use crate::models::{Article, Classified, Event, PromotionWithCompany};

pub use postgres::PgContentFeed;

/// Per-stream caps applied by every feed.
pub const PROMOTION_LIMIT: usize = 10;
pub const ARTICLE_LIMIT: usize = 6;
pub const EVENT_LIMIT: usize = 4;
pub const CLASSIFIED_LIMIT: usize = 6;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Source of already filtered and capped homepage content.
#[async_trait]
pub trait ContentFeed: Send + Sync {
    /// Approved promotions that have not expired yet.
    async fn promotions(&self) -> Result<Vec<PromotionWithCompany>>;

    /// Published articles, most recent first.
    async fn articles(&self) -> Result<Vec<Article>>;

    /// Published events dated today or later.
    async fn events(&self) -> Result<Vec<Event>>;

    /// Active classifieds.
    async fn classifieds(&self) -> Result<Vec<Classified>>;
}

// ────────────────────────────────────────────────────────────────────────────
// Concurrent fetch
// ────────────────────────────────────────────────────────────────────────────

/// Runs all four fetches concurrently. A failed stream is logged and treated
/// as empty, so this never fails and the engine falls back to placeholders.
pub async fn fetch_content_input(feed: &dyn ContentFeed) -> ContentInput {
    let (promotions, articles, events, classifieds) = tokio::join!(
        feed.promotions(),
        feed.articles(),
        feed.events(),
        feed.classifieds(),
    );

    let input = ContentInput {
        promotions: or_empty("promotions", promotions),
        articles: or_empty("articles", articles),
        events: or_empty("events", events),
        classifieds: or_empty("classifieds", classifieds),
    };

    info!(
        promotions = input.promotions.len(),
        articles = input.articles.len(),
        events = input.events.len(),
        classifieds = input.classifieds.len(),
        total = input.total_items(),
        "Fetched homepage content"
    );

    input
}

fn or_empty<T>(stream: &str, result: Result<Vec<T>>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        error!("Error fetching {stream}: {e:?}");
        Vec::new()
    })
}

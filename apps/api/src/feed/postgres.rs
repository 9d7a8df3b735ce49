use anyhow::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;

use crate::models::{Article, Classified, Event, PromotionWithCompany};

use super::{ContentFeed, ARTICLE_LIMIT, CLASSIFIED_LIMIT, EVENT_LIMIT, PROMOTION_LIMIT};

/// `ContentFeed` backed by the portal's PostgreSQL tables.
pub struct PgContentFeed {
    pool: PgPool,
}

impl PgContentFeed {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[async_trait]
impl ContentFeed for PgContentFeed {
    async fn promotions(&self) -> Result<Vec<PromotionWithCompany>> {
        Ok(sqlx::query_as::<_, PromotionWithCompany>(
            r#"
            SELECT p.id, p.company_id, p.title, p.description, p.image_url,
                   p.valid_until, p.contact_email, p.contact_phone, p.status, p.created_at,
                   c.name AS company_name, c.slug AS company_slug,
                   c.image_url AS company_image_url
            FROM promotions p
            LEFT JOIN companies c ON c.id = p.company_id
            WHERE p.status = 'approved' AND p.valid_until >= $1
            ORDER BY p.created_at DESC
            LIMIT $2
            "#,
        )
        .bind(today())
        .bind(PROMOTION_LIMIT as i64)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn articles(&self) -> Result<Vec<Article>> {
        Ok(sqlx::query_as::<_, Article>(
            "SELECT * FROM articles WHERE is_published = true ORDER BY published_at DESC LIMIT $1",
        )
        .bind(ARTICLE_LIMIT as i64)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn events(&self) -> Result<Vec<Event>> {
        Ok(sqlx::query_as::<_, Event>(
            r#"
            SELECT * FROM events
            WHERE is_published = true AND event_date >= $1
            ORDER BY event_date ASC
            LIMIT $2
            "#,
        )
        .bind(today())
        .bind(EVENT_LIMIT as i64)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn classifieds(&self) -> Result<Vec<Classified>> {
        Ok(sqlx::query_as::<_, Classified>(
            r#"
            SELECT * FROM classifieds
            WHERE status = 'active'
            ORDER BY is_featured DESC, created_at DESC
            LIMIT $1
            "#,
        )
        .bind(CLASSIFIED_LIMIT as i64)
        .fetch_all(&self.pool)
        .await?)
    }
}

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub event_date: NaiveDate,
    pub event_time_start: Option<NaiveTime>,
    pub event_time_end: Option<NaiveTime>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub organizer: Option<String>,
    pub price: Option<String>,
    pub target: Option<String>,
    pub website_url: Option<String>,
    pub facebook_url: Option<String>,
    pub is_featured: bool,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

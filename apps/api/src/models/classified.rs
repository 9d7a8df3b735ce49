use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Classified {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: Option<f64>,
    /// "fixed" | "negotiable" | "per_hour" | "free"
    pub price_type: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub contact_name: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    /// "pending" | "active" | "sold" | "expired" | "rejected"
    pub status: String,
    pub is_featured: bool,
    pub views: i32,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

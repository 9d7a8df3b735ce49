use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Promotions with at most this many days left are flagged as ending soon.
pub const ENDING_SOON_DAYS: i64 = 3;

/// An approved promotion joined with the company that posted it.
/// Company columns are nullable because the join is a LEFT JOIN.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PromotionWithCompany {
    pub id: Uuid,
    pub company_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub valid_until: NaiveDate,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub company_name: Option<String>,
    pub company_slug: Option<String>,
    pub company_image_url: Option<String>,
}

/// Derived display hints for a promotion cell.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PromotionDisplay {
    pub days_left: i64,
    pub ending_soon: bool,
    pub display_image: Option<String>,
}

impl PromotionWithCompany {
    /// Whole days from `today` until the promotion expires. Negative once expired.
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.valid_until - today).num_days()
    }

    pub fn is_ending_soon(&self, today: NaiveDate) -> bool {
        self.days_left(today) <= ENDING_SOON_DAYS
    }

    /// Promotion image, falling back to the company logo.
    pub fn display_image(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .or(self.company_image_url.as_deref())
    }

    pub fn display(&self, today: NaiveDate) -> PromotionDisplay {
        PromotionDisplay {
            days_left: self.days_left(today),
            ending_soon: self.is_ending_soon(today),
            display_image: self.display_image().map(str::to_string),
        }
    }
}

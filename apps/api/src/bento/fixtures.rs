//! Record builders shared by the bento test modules.

use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

use crate::models::{Article, Classified, Event, PromotionWithCompany};

use super::types::ContentInput;

pub fn make_promotion(title: &str) -> PromotionWithCompany {
    PromotionWithCompany {
        id: Uuid::new_v4(),
        company_id: Uuid::new_v4(),
        title: title.to_string(),
        description: None,
        image_url: None,
        valid_until: Utc::now().date_naive() + Duration::days(14),
        contact_email: "owner@example.com".to_string(),
        contact_phone: None,
        status: "approved".to_string(),
        created_at: Utc::now(),
        company_name: Some("Piekarnia".to_string()),
        company_slug: Some("piekarnia".to_string()),
        company_image_url: None,
    }
}

pub fn make_article(title: &str) -> Article {
    Article {
        id: Uuid::new_v4(),
        title: title.to_string(),
        slug: title.to_lowercase().replace(' ', "-"),
        excerpt: String::new(),
        content: String::new(),
        image_url: None,
        category: "aktualnosci".to_string(),
        is_featured: false,
        is_published: true,
        author: "Redakcja".to_string(),
        views: 0,
        published_at: Utc::now(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn make_event(title: &str) -> Event {
    Event {
        id: Uuid::new_v4(),
        title: title.to_string(),
        slug: title.to_lowercase().replace(' ', "-"),
        excerpt: None,
        description: None,
        image_url: None,
        event_date: NaiveDate::from_ymd_opt(2030, 6, 1).unwrap(),
        event_time_start: None,
        event_time_end: None,
        location: None,
        address: None,
        organizer: None,
        price: None,
        target: None,
        website_url: None,
        facebook_url: None,
        is_featured: false,
        is_published: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn make_classified(title: &str) -> Classified {
    Classified {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: String::new(),
        category: "sprzedam".to_string(),
        price: Some(100.0),
        price_type: Some("fixed".to_string()),
        location: None,
        image_url: None,
        contact_name: "Jan".to_string(),
        contact_email: None,
        contact_phone: None,
        status: "active".to_string(),
        is_featured: false,
        views: 0,
        expires_at: None,
        created_at: Utc::now(),
    }
}

/// Builds an input with `n` records in each stream, in that order.
pub fn make_input(promotions: usize, articles: usize, events: usize, classifieds: usize) -> ContentInput {
    ContentInput {
        promotions: (0..promotions)
            .map(|i| make_promotion(&format!("Promo {i}")))
            .collect(),
        articles: (0..articles)
            .map(|i| make_article(&format!("Article {i}")))
            .collect(),
        events: (0..events).map(|i| make_event(&format!("Event {i}"))).collect(),
        classifieds: (0..classifieds)
            .map(|i| make_classified(&format!("Classified {i}")))
            .collect(),
    }
}

/// Every entry id the input could legally produce.
pub fn input_entry_ids(input: &ContentInput) -> Vec<String> {
    input
        .promotions
        .iter()
        .map(|p| format!("promo-{}", p.id))
        .chain(input.articles.iter().map(|a| format!("news-{}", a.id)))
        .chain(input.events.iter().map(|e| format!("event-{}", e.id)))
        .chain(input.classifieds.iter().map(|c| format!("classified-{}", c.id)))
        .collect()
}

use serde::{Deserialize, Serialize};

use crate::models::{Article, Classified, Event, PromotionWithCompany};

/// Total cells in the homepage grid: one featured 2×2 plus six 1×1.
pub const TOTAL_SLOTS: usize = 7;

/// The single large cell.
pub const FEATURED_SLOT: usize = 0;

/// Placeholder category for an empty small slot `i` is `PLACEHOLDER_CYCLE[i % 3]`.
pub const PLACEHOLDER_CYCLE: [PlaceholderKind; 3] = [
    PlaceholderKind::Promotion,
    PlaceholderKind::Classified,
    PlaceholderKind::Event,
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BentoSize {
    #[serde(rename = "1x1")]
    Small,
    #[serde(rename = "2x2")]
    Large,
}

impl BentoSize {
    /// Fixed size class of a grid slot.
    pub fn for_slot(slot: usize) -> Self {
        if slot == FEATURED_SLOT {
            BentoSize::Large
        } else {
            BentoSize::Small
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderKind {
    Promotion,
    Classified,
    Event,
}

impl PlaceholderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PlaceholderKind::Promotion => "promotion",
            PlaceholderKind::Classified => "classified",
            PlaceholderKind::Event => "event",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "promotion" => Some(PlaceholderKind::Promotion),
            "classified" => Some(PlaceholderKind::Classified),
            "event" => Some(PlaceholderKind::Event),
            _ => None,
        }
    }

    /// Category used for an unfilled small slot.
    pub fn for_slot(slot: usize) -> Self {
        PLACEHOLDER_CYCLE[slot % PLACEHOLDER_CYCLE.len()]
    }
}

/// What occupies a grid cell. Serialized as `{"type": ..., "data": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum BentoContent {
    Promotion(PromotionWithCompany),
    News(Article),
    Event(Event),
    Classified(Classified),
    Placeholder { placeholder_type: PlaceholderKind },
}

impl BentoContent {
    pub fn kind_str(&self) -> &'static str {
        match self {
            BentoContent::Promotion(_) => "promotion",
            BentoContent::News(_) => "news",
            BentoContent::Event(_) => "event",
            BentoContent::Classified(_) => "classified",
            BentoContent::Placeholder { .. } => "placeholder",
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, BentoContent::Placeholder { .. })
    }
}

/// One composed grid cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BentoEntry {
    /// Kind-prefixed key, unique within one composition.
    pub id: String,
    #[serde(flatten)]
    pub content: BentoContent,
    pub size: BentoSize,
}

impl BentoEntry {
    pub fn promotion(promotion: PromotionWithCompany, size: BentoSize) -> Self {
        Self {
            id: format!("promo-{}", promotion.id),
            content: BentoContent::Promotion(promotion),
            size,
        }
    }

    pub fn news(article: Article, size: BentoSize) -> Self {
        Self {
            id: format!("news-{}", article.id),
            content: BentoContent::News(article),
            size,
        }
    }

    pub fn event(event: Event, size: BentoSize) -> Self {
        Self {
            id: format!("event-{}", event.id),
            content: BentoContent::Event(event),
            size,
        }
    }

    pub fn classified(classified: Classified, size: BentoSize) -> Self {
        Self {
            id: format!("classified-{}", classified.id),
            content: BentoContent::Classified(classified),
            size,
        }
    }

    pub fn featured_placeholder() -> Self {
        Self {
            id: "placeholder-featured".to_string(),
            content: BentoContent::Placeholder {
                placeholder_type: PlaceholderKind::Promotion,
            },
            size: BentoSize::Large,
        }
    }

    pub fn slot_placeholder(slot: usize) -> Self {
        Self {
            id: format!("placeholder-{slot}"),
            content: BentoContent::Placeholder {
                placeholder_type: PlaceholderKind::for_slot(slot),
            },
            size: BentoSize::Small,
        }
    }

    #[cfg(test)]
    pub fn placeholder_kind(&self) -> Option<PlaceholderKind> {
        match &self.content {
            BentoContent::Placeholder { placeholder_type } => Some(*placeholder_type),
            _ => None,
        }
    }
}

/// The four freshly fetched content streams handed to the engine.
#[derive(Debug, Clone, Default)]
pub struct ContentInput {
    pub promotions: Vec<PromotionWithCompany>,
    pub articles: Vec<Article>,
    pub events: Vec<Event>,
    pub classifieds: Vec<Classified>,
}

impl ContentInput {
    pub fn total_items(&self) -> usize {
        self.promotions.len() + self.articles.len() + self.events.len() + self.classifieds.len()
    }
}

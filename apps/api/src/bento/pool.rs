//! Pool Builder — merges the per-type streams into one candidate list.

use crate::models::{Article, Classified, Event, PromotionWithCompany};

use super::shuffle::{shuffle, RandomSource};
use super::types::{BentoEntry, BentoSize, ContentInput};

/// Independently shuffled copies of the four input streams.
///
/// The featured selector takes its pick from here before the pool is built.
#[derive(Debug, Clone)]
pub struct ShuffledStreams {
    pub promotions: Vec<PromotionWithCompany>,
    pub articles: Vec<Article>,
    pub events: Vec<Event>,
    pub classifieds: Vec<Classified>,
}

impl ShuffledStreams {
    pub fn new(input: &ContentInput, rng: &mut dyn RandomSource) -> Self {
        Self {
            promotions: shuffle(&input.promotions, rng),
            articles: shuffle(&input.articles, rng),
            events: shuffle(&input.events, rng),
            classifieds: shuffle(&input.classifieds, rng),
        }
    }
}

/// Concatenates promotions, events, articles and classifieds as 1×1 entries,
/// then shuffles the whole pool once more.
pub fn build_pool(streams: ShuffledStreams, rng: &mut dyn RandomSource) -> Vec<BentoEntry> {
    let ShuffledStreams {
        promotions,
        articles,
        events,
        classifieds,
    } = streams;

    let pool: Vec<BentoEntry> = promotions
        .into_iter()
        .map(|p| BentoEntry::promotion(p, BentoSize::Small))
        .chain(events.into_iter().map(|e| BentoEntry::event(e, BentoSize::Small)))
        .chain(articles.into_iter().map(|a| BentoEntry::news(a, BentoSize::Small)))
        .chain(
            classifieds
                .into_iter()
                .map(|c| BentoEntry::classified(c, BentoSize::Small)),
        )
        .collect();

    shuffle(&pool, rng)
}

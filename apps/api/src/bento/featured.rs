//! Featured Selector — picks the single 2×2 item for slot 0.

use super::pool::ShuffledStreams;
use super::types::{BentoEntry, BentoSize};

/// Takes the head of the shuffled article stream, else the head of the shuffled
/// promotion stream, else a promotion placeholder.
///
/// The chosen item is removed from its stream so the pool never sees it again.
pub fn select_featured(streams: &mut ShuffledStreams) -> BentoEntry {
    if !streams.articles.is_empty() {
        let article = streams.articles.remove(0);
        return BentoEntry::news(article, BentoSize::Large);
    }

    if !streams.promotions.is_empty() {
        let promotion = streams.promotions.remove(0);
        return BentoEntry::promotion(promotion, BentoSize::Large);
    }

    BentoEntry::featured_placeholder()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bento::fixtures::make_input;
    use crate::bento::shuffle::test_sources::IdentitySource;
    use crate::bento::types::{BentoContent, PlaceholderKind};

    #[test]
    fn test_article_preferred_over_promotion() {
        let input = make_input(3, 2, 0, 0);
        let mut streams = ShuffledStreams::new(&input, &mut IdentitySource);
        let featured = select_featured(&mut streams);

        assert_eq!(featured.id, format!("news-{}", input.articles[0].id));
        assert_eq!(featured.size, BentoSize::Large);
        assert_eq!(streams.articles.len(), 1, "Featured article removed from stream");
        assert_eq!(streams.promotions.len(), 3, "Promotions untouched");
    }

    #[test]
    fn test_promotion_fallback() {
        let input = make_input(2, 0, 4, 4);
        let mut streams = ShuffledStreams::new(&input, &mut IdentitySource);
        let featured = select_featured(&mut streams);

        assert!(matches!(featured.content, BentoContent::Promotion(_)));
        assert_eq!(featured.size, BentoSize::Large);
        assert_eq!(streams.promotions.len(), 1);
    }

    #[test]
    fn test_events_and_classifieds_never_featured() {
        let input = make_input(0, 0, 4, 6);
        let mut streams = ShuffledStreams::new(&input, &mut IdentitySource);
        let featured = select_featured(&mut streams);

        assert_eq!(featured.placeholder_kind(), Some(PlaceholderKind::Promotion));
        assert_eq!(featured.size, BentoSize::Large);
        assert_eq!(streams.events.len(), 4);
        assert_eq!(streams.classifieds.len(), 6);
    }
}

//! Composition pipeline: per-type shuffle → featured → pool → slots.
//!
//! Pure and synchronous. The only side effect is drawing from `rng`.

use tracing::debug;

use super::featured::select_featured;
use super::pool::{build_pool, ShuffledStreams};
use super::shuffle::RandomSource;
use super::slots::fill_slots;
use super::types::{BentoEntry, ContentInput, TOTAL_SLOTS};

/// Composes the seven homepage grid cells from the four content streams.
///
/// Total over all inputs, including four empty streams. Entry 0 is 2×2,
/// entries 1..=6 are 1×1, and no real record appears twice.
pub fn generate_bento_content(input: &ContentInput, rng: &mut dyn RandomSource) -> Vec<BentoEntry> {
    let mut streams = ShuffledStreams::new(input, rng);

    let featured = select_featured(&mut streams);
    let pool = build_pool(streams, rng);
    let pool_size = pool.len();

    let mut content = Vec::with_capacity(TOTAL_SLOTS);
    content.push(featured);
    content.extend(fill_slots(pool));

    debug!(
        promotions = input.promotions.len(),
        articles = input.articles.len(),
        events = input.events.len(),
        classifieds = input.classifieds.len(),
        pool_size,
        placeholders = content.iter().filter(|e| e.content.is_placeholder()).count(),
        featured = content[0].content.kind_str(),
        "Composed bento grid"
    );

    content
}

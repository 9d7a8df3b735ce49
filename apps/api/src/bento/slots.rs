//! Slot Filler — populates the six 1×1 cells from the candidate pool.

use super::types::{BentoEntry, BentoSize, FEATURED_SLOT, TOTAL_SLOTS};

/// Fills slots 1..=6 in order. Pool entries are consumed front to back; once
/// the pool runs dry each remaining slot gets a placeholder keyed by its index.
///
/// Always returns exactly `TOTAL_SLOTS - 1` entries.
pub fn fill_slots(pool: Vec<BentoEntry>) -> Vec<BentoEntry> {
    let mut pool = pool.into_iter();

    ((FEATURED_SLOT + 1)..TOTAL_SLOTS)
        .map(|slot| match pool.next() {
            Some(mut entry) => {
                entry.size = BentoSize::for_slot(slot);
                entry
            }
            None => BentoEntry::slot_placeholder(slot),
        })
        .collect()
}

// Bento Content Composition Engine
// Assembles the homepage grid: 1 featured 2x2 cell + 6 regular 1x1 cells.
// No I/O here. Callers fetch the four streams (see `feed`) and pass a random source.

pub mod compose;
pub mod featured;
pub mod placeholder;
pub mod pool;
pub mod shuffle;
pub mod slots;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export the public API consumed by handlers.
pub use compose::generate_bento_content;
pub use placeholder::{placeholder_cta, RenderedCta};
pub use types::{BentoContent, BentoEntry, BentoSize, ContentInput, PlaceholderKind};

//! Static call-to-action content for unfilled grid cells.

use serde::Serialize;

use super::types::{BentoSize, PlaceholderKind};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlaceholderCta {
    pub kind: PlaceholderKind,
    pub title: &'static str,
    pub description: &'static str,
    pub button_text: &'static str,
    pub href: &'static str,
}

/// CTA as rendered in a cell of the given size.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RenderedCta {
    pub kind: PlaceholderKind,
    pub title: &'static str,
    /// Only large cells have room for the description.
    pub description: Option<&'static str>,
    pub button_text: &'static str,
    pub href: &'static str,
}

const PROMOTION_CTA: PlaceholderCta = PlaceholderCta {
    kind: PlaceholderKind::Promotion,
    title: "Masz firmę w okolicy?",
    description: "Dodaj promocję za darmo i dotrzyj do mieszkańców gminy!",
    button_text: "Dodaj promocję",
    href: "/promocje/dodaj",
};

const CLASSIFIED_CTA: PlaceholderCta = PlaceholderCta {
    kind: PlaceholderKind::Classified,
    title: "Chcesz coś sprzedać?",
    description: "Dodaj ogłoszenie i dotrzyj do lokalnych mieszkańców!",
    button_text: "Dodaj ogłoszenie",
    href: "/ogloszenia/dodaj",
};

const EVENT_CTA: PlaceholderCta = PlaceholderCta {
    kind: PlaceholderKind::Event,
    title: "Organizujesz wydarzenie?",
    description: "Daj znać mieszkańcom gminy o nadchodzącym wydarzeniu!",
    button_text: "Zgłoś wydarzenie",
    href: "/kontakt",
};

pub fn placeholder_cta(kind: PlaceholderKind) -> &'static PlaceholderCta {
    match kind {
        PlaceholderKind::Promotion => &PROMOTION_CTA,
        PlaceholderKind::Classified => &CLASSIFIED_CTA,
        PlaceholderKind::Event => &EVENT_CTA,
    }
}

impl PlaceholderCta {
    pub fn for_size(&self, size: BentoSize) -> RenderedCta {
        RenderedCta {
            kind: self.kind,
            title: self.title,
            description: (size == BentoSize::Large).then_some(self.description),
            button_text: self.button_text,
            href: self.href,
        }
    }
}

//! Axum route handlers for the homepage grid.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use tracing::debug;

use crate::bento::{
    generate_bento_content, placeholder_cta, BentoContent, BentoEntry, BentoSize, PlaceholderKind,
    RenderedCta,
};
use crate::config::BRAND;
use crate::errors::AppError;
use crate::feed::fetch_content_input;
use crate::models::PromotionDisplay;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SiteInfo {
    pub brand: &'static str,
    pub region: String,
    pub title: String,
    pub url: String,
}

/// A grid cell as sent to the renderer. Promotion cells carry display hints.
#[derive(Debug, Serialize)]
pub struct EntryView {
    #[serde(flatten)]
    pub entry: BentoEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PromotionDisplay>,
}

impl EntryView {
    fn new(entry: BentoEntry, today: NaiveDate) -> Self {
        let promotion = match &entry.content {
            BentoContent::Promotion(p) => Some(p.display(today)),
            _ => None,
        };
        Self { entry, promotion }
    }
}

#[derive(Debug, Serialize)]
pub struct BentoResponse {
    pub entries: Vec<EntryView>,
    pub site: SiteInfo,
}

#[derive(Debug, Deserialize)]
pub struct PlaceholderQuery {
    pub size: Option<BentoSize>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/home/bento
///
/// Fetches the four content streams and composes a fresh 7-cell grid.
/// Never fails: missing content turns into placeholders.
pub async fn handle_get_bento(State(state): State<AppState>) -> Json<BentoResponse> {
    let input = fetch_content_input(state.feed.as_ref()).await;

    let entries = match state.config.bento_seed {
        Some(seed) => generate_bento_content(&input, &mut StdRng::seed_from_u64(seed)),
        None => generate_bento_content(&input, &mut rand::thread_rng()),
    };

    let today = Utc::now().date_naive();

    Json(BentoResponse {
        entries: entries
            .into_iter()
            .map(|entry| EntryView::new(entry, today))
            .collect(),
        site: SiteInfo {
            brand: BRAND,
            region: state.config.site_region.clone(),
            title: state.config.site_title(),
            url: state.config.url_for(""),
        },
    })
}

/// GET /api/v1/home/placeholders/:kind?size=1x1|2x2
///
/// Returns the call-to-action shown in an unfilled cell.
pub async fn handle_get_placeholder(
    Path(kind): Path<String>,
    query: Result<Query<PlaceholderQuery>, QueryRejection>,
) -> Result<Json<RenderedCta>, AppError> {
    let kind = PlaceholderKind::parse(&kind)
        .ok_or_else(|| AppError::Validation(format!("Unknown placeholder kind '{kind}'")))?;
    let Query(params) = query.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let size = params.size.unwrap_or(BentoSize::Small);

    debug!(kind = kind.as_str(), ?size, "Serving placeholder CTA");

    Ok(Json(placeholder_cta(kind).for_size(size)))
}

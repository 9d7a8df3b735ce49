use std::sync::Arc;

use crate::config::Config;
use crate::feed::ContentFeed;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable content source. Default: PgContentFeed.
    pub feed: Arc<dyn ContentFeed>,
    pub config: Config,
}

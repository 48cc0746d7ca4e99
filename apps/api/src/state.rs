use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::matching::scoring::{MatchScorer, OverlapScorer};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable match scorer. Default: OverlapScorer.
    pub match_scorer: Arc<dyn MatchScorer>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            match_scorer: Arc::new(OverlapScorer),
            started_at: Utc::now(),
        }
    }
}

use std::sync::Arc;

use crate::composer::{InitialBand, PromptLimits};
use crate::config::Config;
use crate::history::HistoryStore;
use crate::image_client::ImageClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL-backed when DATABASE_URL is set, in-memory otherwise.
    pub history: Arc<dyn HistoryStore>,
    pub images: ImageClient,
    pub config: Config,
    pub limits: PromptLimits,
    pub band: InitialBand,
}

impl AppState {
    pub fn new(config: Config, history: Arc<dyn HistoryStore>, images: ImageClient) -> Self {
        Self {
            limits: config.prompt_limits(),
            band: config.initial_band(),
            history,
            images,
            config,
        }
    }
}

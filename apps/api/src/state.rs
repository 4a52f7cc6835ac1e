use std::sync::Arc;

use crate::config::Config;
use crate::meme_client::MemeClient;
use crate::sentiment::PolarityScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable polarity scorer. Default: LexiconScorer, loaded once at startup.
    pub scorer: Arc<dyn PolarityScorer>,
    pub memes: MemeClient,
    /// Full config retained for handlers that need endpoint or path settings.
    #[allow(dead_code)]
    pub config: Config,
}

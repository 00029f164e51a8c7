use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::AppConfig;
use crate::models::catalog::Catalog;
use crate::observability::AppMetrics;
use crate::security::validation::RequestValidator;
use crate::services::random::{RandomSource, entropy_source};
use crate::services::responder::{ResponseSelector, Vocabulary};

/// Application state shared by all handlers
///
/// Handlers are stateless apart from the random draw; no per-user state is kept.
#[derive(Clone)]
pub struct AppState {
    /// Riddle and animal tables served and graded by the API
    pub catalog: Arc<Catalog>,
    /// Canned reply selector
    pub selector: Arc<ResponseSelector>,
    /// Random source for fallback replies
    pub rng: Arc<Mutex<Box<dyn RandomSource>>>,
    /// Request validator
    pub validator: Arc<RequestValidator>,
    /// Request counters
    pub metrics: Arc<AppMetrics>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("riddles", &self.catalog.riddles.len())
            .field("animals", &self.catalog.animals.len())
            .field("vocabulary", &self.selector.vocabulary())
            .field("rng", &"Arc<Mutex<Box<dyn RandomSource>>>")
            .field("validator", &self.validator)
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(
        catalog: Catalog,
        selector: ResponseSelector,
        rng: Box<dyn RandomSource>,
        validator: RequestValidator,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            selector: Arc::new(selector),
            rng: Arc::new(Mutex::new(rng)),
            validator: Arc::new(validator),
            metrics,
        }
    }

    /// Create application state from configuration
    pub fn from_config(config: &AppConfig, metrics: Arc<AppMetrics>) -> Self {
        Self::new(
            Catalog::builtin(),
            ResponseSelector::new(config.chat.vocabulary),
            Box::new(entropy_source()),
            RequestValidator::new().with_max_message_chars(config.chat.max_message_chars),
            metrics,
        )
    }

    /// Create development application state with the backend vocabulary
    pub fn development() -> Self {
        Self::new(
            Catalog::builtin(),
            ResponseSelector::new(Vocabulary::Extended),
            Box::new(entropy_source()),
            RequestValidator::new(),
            Arc::new(AppMetrics::default()),
        )
    }
}

use std::sync::Arc;

use crate::cache::LocalCache;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Holds the last quote text and display preferences. Memory or file backed.
    pub cache: Arc<dyn LocalCache>,
}

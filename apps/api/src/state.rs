use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::CompletionModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Injected completion capability. `None` when no API key is configured,
    /// in which case every analysis takes the fallback path.
    pub model: Option<Arc<dyn CompletionModel>>,
    /// Kept for handlers that need runtime settings; only startup reads it today.
    #[allow(dead_code)]
    pub config: Config,
}

use sqlx::PgPool;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::ApiError;

/// Shared per-request context. The store handle and configuration travel
/// through axum `State` instead of process globals; `db` stays `None` when
/// the server boots without a reachable database.
#[derive(Clone)]
pub struct AppState {
    pub db: Option<PgPool>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: Option<PgPool>, config: AppConfig) -> Self {
        Self { db, config: Arc::new(config) }
    }

    /// Pool for routes without a degraded mode. Absence surfaces as an
    /// unclassified server fault, not as 503.
    pub fn pool(&self) -> Result<&PgPool, ApiError> {
        self.db.as_ref().ok_or_else(|| {
            tracing::error!("store accessed before a database pool was configured");
            ApiError::internal_server_error("An error occurred while processing your request")
        })
    }
}

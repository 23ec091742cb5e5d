// Application state shared across all modules

use reqwest::Client;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::auth::jwks::JwksCache;
use crate::common::config::AppConfig;

/// Application state containing database pool, HTTP client, and configuration
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub http: Client,
    pub config: AppConfig,
    pub jwks: Arc<JwksCache>,
}

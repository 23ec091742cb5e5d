// src/lib.rs
//! Chores API - a minimal chore-tracking web backend
//!
//! Browser pages use session-cookie auth against an external identity
//! provider; the JSON API under `/api` is gated by RS256 bearer tokens
//! verified against the provider's published key set.

use axum::{extract::Extension, middleware, Router};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

pub mod auth;
pub mod chores;
pub mod common;
pub mod logging_middleware;
pub mod pages;

use common::AppState;

/// Builds the full application router around shared state.
///
/// Extracted from `main` so integration tests can drive the router
/// directly without binding a socket.
pub fn app(shared: Arc<RwLock<AppState>>) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnSessionEnd);

    Router::new()
        .merge(pages::pages_routes())
        .merge(auth::auth_routes())
        .merge(chores::chores_routes())
        .layer(middleware::from_fn(logging_middleware::log_request_response))
        .layer(session_layer)
        .layer(Extension(shared))
        .layer({
            let cors_origins = std::env::var("CORS_ORIGINS").unwrap_or_default();

            let origins: Vec<axum::http::HeaderValue> = cors_origins
                .split(',')
                .filter_map(|origin| origin.trim().parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([axum::http::Method::GET])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::AUTHORIZATION,
                ])
        })
        .layer(TraceLayer::new_for_http())
}

// src/chores/routes.rs

use axum::{routing::get, Router};

use super::handlers;

/// Create the chores router with all chore-related routes
pub fn chores_routes() -> Router {
    Router::new()
        .route("/api/chores", get(handlers::list_chores))
        .route("/api/chores/:id", get(handlers::get_chore))
}

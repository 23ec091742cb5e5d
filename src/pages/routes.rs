// src/pages/routes.rs

use axum::{routing::get, Router};

use super::handlers;

/// Create the router for the public HTML pages
///
/// The `/:name` greeting route is a catch-all; the static auth routes
/// registered elsewhere take precedence over it.
pub fn pages_routes() -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/:name", get(handlers::greet))
}

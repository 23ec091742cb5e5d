//! Authentication routes

use axum::{routing::get, Router};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `GET /login` - Redirect to the identity provider's authorize endpoint
/// - `GET /callback` - Exchange the authorization code and establish a session
/// - `GET /logout` - Destroy the session and log out of the provider
/// - `GET /dashboard` - Session-protected profile page
pub fn auth_routes() -> Router {
    Router::new()
        .route("/login", get(handlers::login))
        .route("/callback", get(handlers::callback))
        .route("/logout", get(handlers::logout))
        .route("/dashboard", get(handlers::dashboard))
}

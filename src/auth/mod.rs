//! # Auth Module
//!
//! This module handles all authentication-related functionality including:
//! - Browser login/callback/logout against the external identity provider
//! - Bearer-token verification against the provider's published key set
//! - SessionUser and BearerClaims extractors for protected routes

pub mod extractors;
pub mod handlers;
pub mod jwks;
pub mod models;
pub mod routes;

#[cfg(test)]
mod tests;

pub use extractors::{BearerClaims, SessionUser};
pub use models::Claims;
pub use routes::auth_routes;

//! # Chores Module
//!
//! Read-only JSON API over the chores table. Rows are populated
//! externally; there are no write endpoints.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(test)]
mod tests;

pub use models::Chore;
pub use routes::chores_routes;

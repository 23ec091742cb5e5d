//! # Pages Module
//!
//! Public HTML landing and greeting pages.

pub mod handlers;
pub mod routes;

pub use routes::pages_routes;

// src/chores/services.rs
//! Data access for the chores table
//!
//! Connections are scoped to each statement by the pool: acquired on
//! execute and released on every exit path, success or fault. Faults are
//! returned to the caller instead of being masked as an empty result, so
//! "no chores" and "store unreachable" stay distinguishable.

use sqlx::SqlitePool;

use super::models::Chore;

/// Lists all chores in stable row order.
pub async fn list_chores(pool: &SqlitePool) -> Result<Vec<Chore>, sqlx::Error> {
    sqlx::query_as::<_, Chore>(
        "SELECT chore_id, name, description, score FROM chores ORDER BY chore_id",
    )
    .fetch_all(pool)
    .await
}

/// Looks up a single chore by id, `None` when no such row exists.
pub async fn get_chore(pool: &SqlitePool, id: i64) -> Result<Option<Chore>, sqlx::Error> {
    sqlx::query_as::<_, Chore>(
        "SELECT chore_id, name, description, score FROM chores WHERE chore_id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

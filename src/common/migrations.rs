// src/common/migrations.rs
//! Database schema bootstrap

use sqlx::SqlitePool;
use std::env;
use tracing::{info, warn};

/// Create the schema if it does not exist yet.
///
/// Chore rows are populated externally; this only guarantees the table is
/// present so read paths fail on "no rows" rather than "no such table".
/// Setting RESET_DB=true drops and recreates the schema.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let should_reset_db = env::var("RESET_DB").unwrap_or_else(|_| "false".to_string()) == "true";

    if should_reset_db {
        warn!("⚠️  RESET_DB=true - Dropping chores table and recreating schema...");
        sqlx::query("DROP TABLE IF EXISTS chores").execute(pool).await?;
    }

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS chores (
            chore_id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            score INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("✅ Database migration completed successfully");

    Ok(())
}

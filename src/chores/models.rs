// src/chores/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Required scope for listing chores over the API
pub const READ_CHORES_SCOPE: &str = "read:data";

/// Chore database model
///
/// The wire format keeps the legacy capitalized field names; the database
/// columns are decoded by name so a schema change fails at decode time
/// instead of silently misassigning fields.
#[derive(FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Chore {
    #[serde(rename = "Id")]
    #[sqlx(rename = "chore_id")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Score")]
    pub score: i64,
}

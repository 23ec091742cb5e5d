// src/chores/handlers.rs

use axum::{
    extract::{Extension, Path},
    response::Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

use super::models::{Chore, READ_CHORES_SCOPE};
use super::services;
use crate::auth::BearerClaims;
use crate::common::{ApiError, AppState};

/// GET /api/chores - List all chores
///
/// Requires a verified bearer token carrying the `read:data` scope. The
/// scope check runs after authentication, so a valid token without the
/// scope gets 403 rather than 401.
pub async fn list_chores(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    BearerClaims(claims): BearerClaims,
) -> Result<Json<Vec<Chore>>, ApiError> {
    if !claims.has_scope(READ_CHORES_SCOPE) {
        warn!(
            sub = %claims.sub,
            required_scope = READ_CHORES_SCOPE,
            "Authorization failed: token lacks required scope"
        );
        return Err(ApiError::InsufficientScope);
    }

    let state = state_lock.read().await.clone();

    let chores = services::list_chores(&state.db).await.map_err(|e| {
        error!(error = %e, "Database error listing chores");
        ApiError::DatabaseError(e)
    })?;

    debug!(chore_count = chores.len(), sub = %claims.sub, "Successfully loaded chores list");

    Ok(Json(chores))
}

/// GET /api/chores/:id - Get a specific chore by id
///
/// Requires a verified bearer token. A missing row yields a `null` body
/// with 200, matching the legacy contract for this endpoint.
pub async fn get_chore(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    BearerClaims(claims): BearerClaims,
    Path(id): Path<i64>,
) -> Result<Json<Option<Chore>>, ApiError> {
    let state = state_lock.read().await.clone();

    let chore = services::get_chore(&state.db, id).await.map_err(|e| {
        error!(error = %e, chore_id = id, "Database error loading chore");
        ApiError::DatabaseError(e)
    })?;

    if chore.is_none() {
        debug!(chore_id = id, sub = %claims.sub, "Chore lookup found no row");
    }

    Ok(Json(chore))
}

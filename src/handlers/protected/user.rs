// handlers/protected/user.rs - /api/auth/* handlers

use axum::{extract::State, Extension};

use crate::database::models::User;
use crate::error::store_failure;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// GET /api/auth/user - Stored profile of the caller, `null` before the
/// first callback
pub async fn current(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Option<User>> {
    let record = state
        .storage
        .get_user(&user.id)
        .await
        .map_err(store_failure("Failed to fetch user"))?;

    Ok(ApiResponse::success(record))
}

/// POST /api/auth/callback - Create or refresh the caller's profile from the
/// token claims. Must run once before user-owned records can be written.
pub async fn callback(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<User> {
    let record = state
        .storage
        .upsert_user(user.to_upsert())
        .await
        .map_err(store_failure("Failed to update user"))?;

    tracing::info!(user_id = %record.id, "User profile synchronized");
    Ok(ApiResponse::success(record))
}

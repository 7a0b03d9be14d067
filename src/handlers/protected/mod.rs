// handlers/protected/mod.rs - Protected handlers (bearer token required)
//
// Every handler here runs behind `jwt_auth_middleware` and receives the
// caller as `Extension<AuthUser>`. User ids always come from the token,
// never from the request body or path.

use axum::{extract::rejection::JsonRejection, Json};

use crate::error::ApiError;
use crate::validation::Validate;

pub mod catalog;
pub mod devotional_readings;
pub mod favorites;
pub mod flashcard_progress;
pub mod highlights;
pub mod notes;
pub mod quiz_attempts;
pub mod reading_progress;
pub mod user;

/// Decode and validate a write payload. Any failure is a 400 carrying the
/// route's fixed message; the cause is only logged.
pub(crate) fn parse_body<T: Validate>(
    body: Result<Json<T>, JsonRejection>,
    message: &'static str,
) -> Result<T, ApiError> {
    let Json(payload) = body.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "{}", message);
        ApiError::validation_error(message)
    })?;

    payload.validate().map_err(|e| {
        tracing::warn!(error = %e, "{}", message);
        ApiError::validation_error(message)
    })?;

    Ok(payload)
}

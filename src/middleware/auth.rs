use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::{bearer_token, Claims};
use crate::database::models::UpsertUser;
use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated user context extracted from the bearer token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
            first_name: claims.first_name,
            last_name: claims.last_name,
            profile_image_url: claims.profile_image_url,
        }
    }
}

impl AuthUser {
    /// Profile record written on login callback
    pub fn to_upsert(&self) -> UpsertUser {
        UpsertUser {
            id: self.id.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            profile_image_url: self.profile_image_url.clone(),
        }
    }
}

/// Bearer token middleware: verifies the token and injects `AuthUser`.
/// Requests without a valid token never reach a handler.
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = bearer_token(header)?;
    let claims = state.verifier.verify(token)?;

    let auth_user = AuthUser::from(claims);
    tracing::debug!(user_id = %auth_user.id, "Authenticated request");
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

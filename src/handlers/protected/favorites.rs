// handlers/protected/favorites.rs - /api/favorites handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};
use serde::Deserialize;

use super::parse_body;
use crate::database::models::{Favorite, FavoriteItem, NewFavorite};
use crate::error::store_failure;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;
use crate::validation::{required, Validate, ValidationError};

/// `{"itemType": "verse" | "devotional" | "multimedia", "itemId": "..."}`
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct CreateFavoriteRequest {
    pub item: FavoriteItem,
}

impl Validate for CreateFavoriteRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        required("itemId", self.item.item_id())
    }
}

impl CreateFavoriteRequest {
    fn into_record(self, user_id: String) -> NewFavorite {
        NewFavorite {
            user_id,
            item: self.item,
        }
    }
}

/// GET /api/favorites
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Vec<Favorite>> {
    let favorites = state
        .storage
        .user_favorites(&user.id)
        .await
        .map_err(store_failure("Failed to fetch favorites"))?;

    Ok(ApiResponse::success(favorites))
}

/// POST /api/favorites
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Result<Json<CreateFavoriteRequest>, JsonRejection>,
) -> ApiResult<Favorite> {
    const MESSAGE: &str = "Failed to create favorite";

    let request = parse_body(body, MESSAGE)?;
    let favorite = state
        .storage
        .create_favorite(request.into_record(user.id))
        .await
        .map_err(store_failure(MESSAGE))?;

    Ok(ApiResponse::created(favorite))
}

/// DELETE /api/favorites/:id
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state
        .storage
        .delete_favorite(&id, &user.id)
        .await
        .map_err(store_failure("Failed to delete favorite"))?;

    Ok(ApiResponse::no_content())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_tagged_item() {
        let body = json!({ "itemType": "multimedia", "itemId": "video-psalms" });
        let request: CreateFavoriteRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.item, FavoriteItem::Multimedia("video-psalms".to_string()));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn rejects_blank_id_and_extra_fields() {
        let request: CreateFavoriteRequest =
            serde_json::from_value(json!({ "itemType": "verse", "itemId": "" })).unwrap();
        assert!(request.validate().is_err());

        let result = serde_json::from_value::<CreateFavoriteRequest>(
            json!({ "itemType": "verse", "itemId": "psa.23.1", "userId": "u2" }),
        );
        assert!(result.is_err());
    }
}

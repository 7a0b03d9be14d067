use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, FromRow, Row};

use super::InvalidVariant;

/// What a favorite points at.
///
/// Stored as `(item_type, item_id)` with no foreign key; on the wire it is
/// `{"itemType": "...", "itemId": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "itemType", content = "itemId", rename_all = "lowercase", deny_unknown_fields)]
pub enum FavoriteItem {
    /// Verse reference as used by the reader, e.g. `psa.23.1`
    Verse(String),
    Devotional(String),
    Multimedia(String),
}

impl FavoriteItem {
    pub fn item_type(&self) -> &'static str {
        match self {
            FavoriteItem::Verse(_) => "verse",
            FavoriteItem::Devotional(_) => "devotional",
            FavoriteItem::Multimedia(_) => "multimedia",
        }
    }

    pub fn item_id(&self) -> &str {
        match self {
            FavoriteItem::Verse(id)
            | FavoriteItem::Devotional(id)
            | FavoriteItem::Multimedia(id) => id,
        }
    }

    pub fn from_parts(item_type: &str, item_id: String) -> Result<Self, InvalidVariant> {
        match item_type {
            "verse" => Ok(FavoriteItem::Verse(item_id)),
            "devotional" => Ok(FavoriteItem::Devotional(item_id)),
            "multimedia" => Ok(FavoriteItem::Multimedia(item_id)),
            other => Err(InvalidVariant {
                kind: "favorite item type",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: String,
    pub user_id: String,
    #[serde(flatten)]
    pub item: FavoriteItem,
    pub created_at: DateTime<Utc>,
}

impl<'r> FromRow<'r, PgRow> for Favorite {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let item_type: String = row.try_get("item_type")?;
        let item_id: String = row.try_get("item_id")?;
        let item =
            FavoriteItem::from_parts(&item_type, item_id).map_err(|e| sqlx::Error::ColumnDecode {
                index: "item_type".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            item,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct NewFavorite {
    pub user_id: String,
    pub item: FavoriteItem,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::text_enum;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub user_id: String,
    pub book_id: String,
    pub chapter: i32,
    pub verse: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewNote {
    pub user_id: String,
    pub book_id: String,
    pub chapter: i32,
    pub verse: i32,
    pub content: String,
}

text_enum! {
    /// Highlight palette; the column defaults to yellow
    #[derive(Default)]
    HighlightColor, "highlight color" {
        #[default]
        Yellow => "yellow",
        Green => "green",
        Blue => "blue",
        Pink => "pink",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub id: String,
    pub user_id: String,
    pub book_id: String,
    pub chapter: i32,
    pub verse: i32,
    #[sqlx(try_from = "String")]
    pub color: HighlightColor,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewHighlight {
    pub user_id: String,
    pub book_id: String,
    pub chapter: i32,
    pub verse: i32,
    pub color: HighlightColor,
}

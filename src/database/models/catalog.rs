use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::text_enum;

text_enum! {
    Testament, "testament" {
        Old => "old",
        New => "new",
    }
}

text_enum! {
    PlanType, "reading plan type" {
        Annual => "annual",
        Thematic => "thematic",
    }
}

text_enum! {
    MediaType, "media type" {
        Video => "video",
        Podcast => "podcast",
        Music => "music",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BibleBook {
    pub id: String,
    pub name: String,
    #[sqlx(try_from = "String")]
    pub testament: Testament,
    pub order: i32,
    pub chapters: i32,
    pub abbreviation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BibleVerse {
    pub id: String,
    pub book_id: String,
    pub chapter: i32,
    pub verse: i32,
    pub version: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Devotional {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub date: NaiveDate,
    pub verse_reference: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ReadingPlan {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Length of the plan in days
    pub duration: i32,
    #[sqlx(rename = "type", try_from = "String")]
    #[serde(rename = "type")]
    pub plan_type: PlanType,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ReadingPlanDay {
    pub id: String,
    pub plan_id: String,
    pub day: i32,
    pub book_id: String,
    pub start_chapter: i32,
    pub end_chapter: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct QaItem {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MultimediaContent {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    #[sqlx(rename = "type", try_from = "String")]
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub url: String,
    pub thumbnail_url: Option<String>,
    /// Seconds
    pub duration: Option<i32>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`
    pub correct_answer: i32,
    pub category: Option<String>,
    pub difficulty: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: String,
    pub book_id: String,
    pub chapter: i32,
    pub verse: i32,
    pub verse_text: String,
    pub category: Option<String>,
}

//! Row types for every persisted entity.
//!
//! User-owned records come in pairs: the stored row (`Note`) and the
//! insertable shape (`NewNote`) that the access layer writes. Enumerated
//! text columns are Rust enums decoded through `TryFrom<String>`.

pub mod catalog;
pub mod favorite;
pub mod note;
pub mod progress;
pub mod user;

pub use catalog::{
    BibleBook, BibleVerse, Devotional, Flashcard, MediaType, MultimediaContent, PlanType, QaItem,
    QuizQuestion, ReadingPlan, ReadingPlanDay, Testament,
};
pub use favorite::{Favorite, FavoriteItem, NewFavorite};
pub use note::{Highlight, HighlightColor, NewHighlight, NewNote, Note};
pub use progress::{
    DevotionalReading, FlashcardProgress, NewFlashcardProgress, NewQuizAttempt,
    NewReadingProgress, QuizAttempt, ReadingProgress,
};
pub use user::{UpsertUser, User};

/// Value outside the set a text enum column accepts
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} '{value}'")]
pub struct InvalidVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Declares a lowercase text enum stored in a `CHECK`-constrained column.
macro_rules! text_enum {
    (
        $(#[$meta:meta])* $name:ident, $kind:literal {
            $($(#[$variant_meta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::database::models::InvalidVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err($crate::database::models::InvalidVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::database::models::InvalidVariant;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

pub(crate) use text_enum;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_enums_round_trip_through_column_text() {
        for color in HighlightColor::ALL {
            assert_eq!(color.as_str().parse::<HighlightColor>().unwrap(), *color);
        }
        assert_eq!(PlanType::try_from("thematic".to_string()).unwrap(), PlanType::Thematic);
        assert_eq!(MediaType::Podcast.to_string(), "podcast");
    }

    #[test]
    fn unknown_variant_names_the_kind() {
        let err = "purple".parse::<HighlightColor>().unwrap_err();
        assert_eq!(err.kind, "highlight color");
        assert_eq!(err.to_string(), "invalid highlight color 'purple'");
    }
}

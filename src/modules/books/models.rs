use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::ServiceError;
use crate::utils::is_blank;

/// Book genre, matching the `genre_book` enum in storage. Values outside the
/// enumeration are rejected when a payload or query string is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "genre_book", rename_all = "lowercase")]
pub enum Genre {
    Fiction,
    #[serde(rename = "non-fiction")]
    #[sqlx(rename = "non-fiction")]
    NonFiction,
    Mystery,
    Fantasy,
    #[serde(rename = "science fiction")]
    #[sqlx(rename = "science fiction")]
    ScienceFiction,
    Biography,
    History,
    Romance,
    Thriller,
    #[serde(rename = "self-help")]
    #[sqlx(rename = "self-help")]
    SelfHelp,
    Children,
    #[serde(rename = "young adult")]
    #[sqlx(rename = "young adult")]
    YoungAdult,
    Horror,
    Poetry,
    Cookbook,
    #[serde(rename = "graphic novel")]
    #[sqlx(rename = "graphic novel")]
    GraphicNovel,
    Travel,
    Health,
    Business,
    Religion,
    Philosophy,
    Art,
    Music,
    Sports,
    Technology,
    Education,
    Parenting,
    #[serde(rename = "home and garden")]
    #[sqlx(rename = "home and garden")]
    HomeAndGarden,
    #[serde(rename = "crafts and hobbies")]
    #[sqlx(rename = "crafts and hobbies")]
    CraftsAndHobbies,
    Computers,
    Internet,
    Science,
    Mathematics,
    Engineering,
    Law,
    Politics,
    #[serde(rename = "social sciences")]
    #[sqlx(rename = "social sciences")]
    SocialSciences,
}

impl Genre {
    /// Wire/storage spelling of the genre.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fiction => "fiction",
            Self::NonFiction => "non-fiction",
            Self::Mystery => "mystery",
            Self::Fantasy => "fantasy",
            Self::ScienceFiction => "science fiction",
            Self::Biography => "biography",
            Self::History => "history",
            Self::Romance => "romance",
            Self::Thriller => "thriller",
            Self::SelfHelp => "self-help",
            Self::Children => "children",
            Self::YoungAdult => "young adult",
            Self::Horror => "horror",
            Self::Poetry => "poetry",
            Self::Cookbook => "cookbook",
            Self::GraphicNovel => "graphic novel",
            Self::Travel => "travel",
            Self::Health => "health",
            Self::Business => "business",
            Self::Religion => "religion",
            Self::Philosophy => "philosophy",
            Self::Art => "art",
            Self::Music => "music",
            Self::Sports => "sports",
            Self::Technology => "technology",
            Self::Education => "education",
            Self::Parenting => "parenting",
            Self::HomeAndGarden => "home and garden",
            Self::CraftsAndHobbies => "crafts and hobbies",
            Self::Computers => "computers",
            Self::Internet => "internet",
            Self::Science => "science",
            Self::Mathematics => "mathematics",
            Self::Engineering => "engineering",
            Self::Law => "law",
            Self::Politics => "politics",
            Self::SocialSciences => "social sciences",
        }
    }
}

/// Book as served by list/detail reads: the base row enriched with the
/// referenced author and publisher names. A soft-deleted or missing
/// reference leaves the name null; the book row itself is never dropped.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author_id: i32,
    pub publisher_id: i32,
    pub isbn: String,
    pub price: String,
    pub stock: String,
    pub year: i32,
    pub genre: Genre,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub author_name: Option<String>,
    pub publisher_name: Option<String>,
}

/// Bare book row as returned by writes (`RETURNING *`), without enrichment.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BookRow {
    pub id: i32,
    pub title: String,
    pub author_id: i32,
    pub publisher_id: i32,
    pub isbn: String,
    pub price: String,
    pub stock: String,
    pub year: i32,
    pub genre: Genre,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Payload for creating a book. Price and stock are numeric-as-text, as
/// stored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBook {
    pub title: Option<String>,
    pub author_id: Option<i32>,
    pub publisher_id: Option<i32>,
    pub isbn: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<Genre>,
    pub description: Option<String>,
}

impl CreateBook {
    /// Presence check for required fields; lists every missing field.
    pub fn validate(&self) -> Result<(), ServiceError> {
        let mut missing = Vec::new();
        if is_blank(&self.title) {
            missing.push("title");
        }
        if self.author_id.is_none() {
            missing.push("author_id");
        }
        if self.publisher_id.is_none() {
            missing.push("publisher_id");
        }
        if is_blank(&self.isbn) {
            missing.push("isbn");
        }
        if is_blank(&self.price) {
            missing.push("price");
        }
        if is_blank(&self.stock) {
            missing.push("stock");
        }
        if self.year.is_none() {
            missing.push("year");
        }
        if self.genre.is_none() {
            missing.push("genre");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::missing_fields(missing))
        }
    }
}

/// Payload for updating a book. Only `id` is service-validated.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBook {
    pub id: Option<i32>,
    pub title: Option<String>,
    pub author_id: Option<i32>,
    pub publisher_id: Option<i32>,
    pub isbn: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<Genre>,
    pub description: Option<String>,
}

/// Query parameters accepted by the book listing endpoint.
///
/// `search` matches the title; `genre` is an independent exact filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub genre: Option<Genre>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> CreateBook {
        CreateBook {
            title: Some("T".to_string()),
            author_id: Some(1),
            publisher_id: Some(2),
            isbn: Some("123".to_string()),
            price: Some("9.99".to_string()),
            stock: Some("5".to_string()),
            year: Some(2020),
            genre: Some(Genre::Fiction),
            description: None,
        }
    }

    #[test]
    fn complete_payload_passes() {
        assert!(full_payload().validate().is_ok());
    }

    #[test]
    fn empty_payload_lists_every_required_field() {
        let payload = CreateBook {
            title: None,
            author_id: None,
            publisher_id: None,
            isbn: None,
            price: None,
            stock: None,
            year: None,
            genre: None,
            description: None,
        };
        match payload.validate() {
            Err(crate::error::ServiceError::Validation { fields, .. }) => {
                assert_eq!(
                    fields,
                    vec![
                        "title",
                        "author_id",
                        "publisher_id",
                        "isbn",
                        "price",
                        "stock",
                        "year",
                        "genre",
                    ]
                );
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn description_is_optional() {
        let mut payload = full_payload();
        payload.description = None;
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn genre_decodes_multi_word_values() {
        let genre: Genre = serde_json::from_str("\"science fiction\"").unwrap();
        assert_eq!(genre, Genre::ScienceFiction);
        assert_eq!(genre.as_str(), "science fiction");
    }

    #[test]
    fn genre_rejects_unknown_values() {
        assert!(serde_json::from_str::<Genre>("\"space opera\"").is_err());
    }

    #[test]
    fn genre_round_trips_through_serde() {
        for genre in [Genre::Fiction, Genre::SelfHelp, Genre::SocialSciences] {
            let encoded = serde_json::to_string(&genre).unwrap();
            assert_eq!(encoded, format!("\"{}\"", genre.as_str()));
            let decoded: Genre = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, genre);
        }
    }
}

//! Book model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::{author::Author, not_blank};

/// Book record with its linked authors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    /// Unique across books when set
    pub isbn: Option<String>,
    pub description: Option<String>,
    pub published_year: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Linked through `book_authors`, loaded separately
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<Author>,
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct NewBook {
    #[validate(
        length(min = 1, message = "Title cannot be empty"),
        custom(function = "not_blank", message = "Title cannot be blank")
    )]
    pub title: String,
    #[validate(length(min = 1, max = 32, message = "ISBN must be 1 to 32 characters"))]
    pub isbn: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0, max = 9999, message = "Published year is out of range"))]
    pub published_year: Option<i32>,
    /// Existing authors to link to the new book
    #[serde(default)]
    pub author_ids: Vec<Uuid>,
}

/// Partial book update.
///
/// Nullable columns use a double option: absent leaves the value, `null`
/// clears it. `author_ids`, when present, replaces the whole author set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Validate, ToSchema)]
pub struct BookPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        length(min = 1, message = "Title cannot be empty"),
        custom(function = "not_blank", message = "Title cannot be blank")
    )]
    pub title: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<String>)]
    #[validate(length(min = 1, max = 32, message = "ISBN must be 1 to 32 characters"))]
    pub isbn: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<i32>)]
    #[validate(range(min = 0, max = 9999, message = "Published year is out of range"))]
    pub published_year: Option<Option<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_ids: Option<Vec<Uuid>>,
}

impl Book {
    /// Build a fresh book with a new identifier and creation timestamps.
    ///
    /// Authors are resolved by the repository once the links are written.
    pub fn create(data: &NewBook) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: data.title.clone(),
            isbn: data.isbn.clone(),
            description: data.description.clone(),
            published_year: data.published_year,
            created_at: now,
            updated_at: now,
            authors: Vec::new(),
        }
    }
}

/// Join row between a book and one of its authors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookAuthor {
    pub book_id: Uuid,
    pub author_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authors_omitted_when_empty() {
        let book = Book::create(&NewBook {
            title: "Dune".into(),
            isbn: None,
            description: None,
            published_year: Some(1965),
            author_ids: vec![],
        });
        let json = serde_json::to_value(&book).unwrap();
        assert!(json.get("authors").is_none());
        assert_eq!(json["published_year"], 1965);
    }

    #[test]
    fn test_patch_fields() {
        let patch: BookPatch =
            serde_json::from_str(r#"{"description":"updated description","isbn":null}"#).unwrap();
        assert_eq!(patch.title, None);
        assert_eq!(patch.description, Some(Some("updated description".to_string())));
        assert_eq!(patch.isbn, Some(None));
        assert_eq!(patch.published_year, None);
        assert_eq!(patch.author_ids, None);
    }

    #[test]
    fn test_new_book_defaults_author_ids() {
        let data: NewBook = serde_json::from_str(r#"{"title":"Dune"}"#).unwrap();
        assert!(data.author_ids.is_empty());
        assert!(data.validate().is_ok());

        let bad: NewBook = serde_json::from_str(r#"{"title":""}"#).unwrap();
        assert!(bad.validate().is_err());

        let blank: NewBook = serde_json::from_str(r#"{"title":"  "}"#).unwrap();
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_patch_validation() {
        let empty_isbn: BookPatch = serde_json::from_str(r#"{"isbn":""}"#).unwrap();
        assert!(empty_isbn.validate().is_err());

        let negative_year: BookPatch = serde_json::from_str(r#"{"published_year":-5}"#).unwrap();
        assert!(negative_year.validate().is_err());

        let cleared: BookPatch =
            serde_json::from_str(r#"{"isbn":null,"published_year":null}"#).unwrap();
        assert!(cleared.validate().is_ok());

        let ok: BookPatch =
            serde_json::from_str(r#"{"isbn":"978-0441013593","published_year":1965}"#).unwrap();
        assert!(ok.validate().is_ok());
    }
}

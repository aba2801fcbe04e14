//! Author model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::not_blank;

/// Author record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    /// Assigned once at creation, never changed afterwards
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create author request
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct NewAuthor {
    #[validate(
        length(min = 1, max = 200, message = "First name must be 1 to 200 characters"),
        custom(function = "not_blank", message = "First name cannot be blank")
    )]
    pub first_name: String,
    #[validate(
        length(min = 1, max = 200, message = "Last name must be 1 to 200 characters"),
        custom(function = "not_blank", message = "Last name cannot be blank")
    )]
    pub last_name: String,
    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,
}

/// Partial author update.
///
/// Absent fields are left untouched. `bio` is nullable, so it distinguishes
/// "absent" (`None`) from an explicit `null` (`Some(None)`) that clears it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Validate, ToSchema)]
pub struct AuthorPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        length(min = 1, max = 200, message = "First name must be 1 to 200 characters"),
        custom(function = "not_blank", message = "First name cannot be blank")
    )]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        length(min = 1, max = 200, message = "Last name must be 1 to 200 characters"),
        custom(function = "not_blank", message = "Last name cannot be blank")
    )]
    pub last_name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<Option<String>>,
}

impl Author {
    /// Build a fresh author with a new identifier and creation timestamps
    pub fn create(data: NewAuthor) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            first_name: data.first_name,
            last_name: data.last_name,
            bio: data.bio,
            created_at: now,
            updated_at: now,
        }
    }
}

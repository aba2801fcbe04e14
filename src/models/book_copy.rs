//! Physical copy of a book

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Book copy record (`book_copies`), removed with its book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookCopy {
    pub id: Uuid,
    pub book_id: Uuid,
    /// Unique across copies
    pub barcode: Option<String>,
    pub condition: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

//! Reservation model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A member's hold on a book, optionally fulfilled by a loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Reservation {
    pub id: Uuid,
    pub member_id: Uuid,
    pub book_id: Uuid,
    pub reserved_at: DateTime<Utc>,
    pub canceled_at: Option<DateTime<Utc>>,
    pub fulfilled_loan_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}


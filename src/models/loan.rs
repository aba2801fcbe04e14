//! Loan model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Loan of one copy to one member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Loan {
    pub id: Uuid,
    pub member_id: Uuid,
    pub copy_id: Uuid,
    pub loaned_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    /// Unset while the copy is still out
    pub returned_at: Option<DateTime<Utc>>,
    pub fine_cents: i32,
    pub created_at: DateTime<Utc>,
}


use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use super::{Platforms, Priority};

/// A single row of the waitlist. Immutable after creation except for
/// `ref_count`, which only the atomic credit operation may touch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub email: String,
    pub platforms: Json<Platforms>,
    pub priority: Priority,
    pub ref_code: String,
    pub referred_by: Option<String>,
    pub ref_count: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct WaitlistEntryCreate {
    pub email: String,
    pub platforms: Platforms,
    pub priority: Priority,
    pub ref_code: String,
    pub referred_by: Option<String>,
}

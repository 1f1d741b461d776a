pub mod activity_log_repository;
pub mod habit_repository;
pub mod user_settings_repository;

use crate::DbError;
use crate::error::Result;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Parse a TEXT uuid column, naming the column in the error.
pub(crate) fn parse_uuid(value: &str, column: &str) -> Result<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::decode(format!("{column} '{value}': {e}")))
}

/// Convert an INTEGER epoch-second column to a UTC instant.
pub(crate) fn parse_timestamp(secs: i64, column: &str) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| DbError::decode(format!("{column} {secs} out of range")))
}

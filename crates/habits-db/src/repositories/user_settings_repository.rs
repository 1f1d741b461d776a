use crate::error::Result as DbErrorResult;
use crate::repositories::{parse_timestamp, parse_uuid};

use habits_core::UserSettings;

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct UserSettingsRow {
    owner_id: String,
    time_zone: String,
    created_at: i64,
    updated_at: i64,
}

fn settings_from_row(row: UserSettingsRow) -> DbErrorResult<UserSettings> {
    Ok(UserSettings {
        owner_id: parse_uuid(&row.owner_id, "user_settings.owner_id")?,
        time_zone: row.time_zone,
        created_at: parse_timestamp(row.created_at, "user_settings.created_at")?,
        updated_at: parse_timestamp(row.updated_at, "user_settings.updated_at")?,
    })
}

pub struct UserSettingsRepository {
    pool: SqlitePool,
}

impl UserSettingsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_owner(&self, owner_id: Uuid) -> DbErrorResult<Option<UserSettings>> {
        let row = sqlx::query_as::<_, UserSettingsRow>(
            r#"
              SELECT owner_id, time_zone, created_at, updated_at
              FROM user_settings
              WHERE owner_id = ?
              "#,
        )
        .bind(owner_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(settings_from_row).transpose()
    }

    /// Every settings row; the expiry sweep walks this to find the users
    /// whose habits are eligible at all.
    pub async fn find_all(&self) -> DbErrorResult<Vec<UserSettings>> {
        let rows = sqlx::query_as::<_, UserSettingsRow>(
            r#"
              SELECT owner_id, time_zone, created_at, updated_at
              FROM user_settings
              ORDER BY owner_id ASC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(settings_from_row).collect()
    }

    /// Insert or update the owner's settings. The original `created_at`
    /// survives an update; only `time_zone` and `updated_at` move.
    pub async fn upsert(
        &self,
        owner_id: Uuid,
        time_zone: &str,
        now: DateTime<Utc>,
    ) -> DbErrorResult<UserSettings> {
        sqlx::query(
            r#"
              INSERT INTO user_settings (owner_id, time_zone, created_at, updated_at)
              VALUES (?, ?, ?, ?)
              ON CONFLICT(owner_id) DO UPDATE
              SET time_zone = excluded.time_zone, updated_at = excluded.updated_at
              "#,
        )
        .bind(owner_id.to_string())
        .bind(time_zone)
        .bind(now.timestamp())
        .bind(now.timestamp())
        .execute(&self.pool)
        .await?;

        let row = sqlx::query_as::<_, UserSettingsRow>(
            r#"
              SELECT owner_id, time_zone, created_at, updated_at
              FROM user_settings
              WHERE owner_id = ?
              "#,
        )
        .bind(owner_id.to_string())
        .fetch_one(&self.pool)
        .await?;

        settings_from_row(row)
    }
}

use crate::error::Result as DbErrorResult;
use crate::repositories::{parse_timestamp, parse_uuid};

use habits_core::Habit;

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(FromRow)]
struct HabitRow {
    id: String,
    owner_id: String,
    name: String,
    streak: i64,
    last_claimed_at: Option<i64>,
    created_at: i64,
    updated_at: i64,
}

fn habit_from_row(row: HabitRow) -> DbErrorResult<Habit> {
    Ok(Habit {
        id: parse_uuid(&row.id, "habits.id")?,
        owner_id: parse_uuid(&row.owner_id, "habits.owner_id")?,
        name: row.name,
        streak: row.streak,
        last_claimed_at: row
            .last_claimed_at
            .map(|secs| parse_timestamp(secs, "habits.last_claimed_at"))
            .transpose()?,
        created_at: parse_timestamp(row.created_at, "habits.created_at")?,
        updated_at: parse_timestamp(row.updated_at, "habits.updated_at")?,
    })
}

pub struct HabitRepository;

impl HabitRepository {
    pub async fn create<'e, E>(executor: E, habit: &Habit) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
              INSERT INTO habits (id, owner_id, name, streak, last_claimed_at, created_at, updated_at)
              VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(habit.id.to_string())
        .bind(habit.owner_id.to_string())
        .bind(&habit.name)
        .bind(habit.streak)
        .bind(habit.last_claimed_at.map(|t| t.timestamp()))
        .bind(habit.created_at.timestamp())
        .bind(habit.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Habit>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, HabitRow>(
            r#"
              SELECT id, owner_id, name, streak, last_claimed_at, created_at, updated_at
              FROM habits
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(habit_from_row).transpose()
    }

    /// All habits of one owner, oldest first.
    pub async fn find_by_owner<'e, E>(executor: E, owner_id: Uuid) -> DbErrorResult<Vec<Habit>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, HabitRow>(
            r#"
              SELECT id, owner_id, name, streak, last_claimed_at, created_at, updated_at
              FROM habits
              WHERE owner_id = ?
              ORDER BY created_at ASC, id ASC
              "#,
        )
        .bind(owner_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(habit_from_row).collect()
    }

    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM habits WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    /// Conditionally record a claim: bump the streak and stamp
    /// `last_claimed_at`, but only if the row still carries the claim state
    /// the caller observed. Returns false when a concurrent claim got there
    /// first (zero rows updated).
    pub async fn claim<'e, E>(
        executor: E,
        id: Uuid,
        expected_last_claimed_at: Option<DateTime<Utc>>,
        claimed_at: DateTime<Utc>,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        // IS compares NULLs as equal, so one statement covers both the
        // never-claimed and previously-claimed cases
        let result = sqlx::query(
            r#"
              UPDATE habits
              SET streak = streak + 1, last_claimed_at = ?, updated_at = ?
              WHERE id = ? AND last_claimed_at IS ?
              "#,
        )
        .bind(claimed_at.timestamp())
        .bind(claimed_at.timestamp())
        .bind(id.to_string())
        .bind(expected_last_claimed_at.map(|t| t.timestamp()))
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Zero the streak, leaving `last_claimed_at` as-is so repeated sweeps
    /// make the same decision.
    pub async fn reset_streak<'e, E>(
        executor: E,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("UPDATE habits SET streak = 0, updated_at = ? WHERE id = ?")
            .bind(now.timestamp())
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}

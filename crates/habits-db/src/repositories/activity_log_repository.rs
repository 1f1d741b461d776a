use crate::error::Result as DbErrorResult;
use crate::repositories::{parse_timestamp, parse_uuid};

use habits_core::HabitActivity;

use sqlx::FromRow;
use uuid::Uuid;

#[derive(FromRow)]
struct HabitActivityRow {
    id: String,
    habit_id: String,
    activity: String,
    created_at: i64,
}

fn activity_from_row(row: HabitActivityRow) -> DbErrorResult<HabitActivity> {
    Ok(HabitActivity {
        id: parse_uuid(&row.id, "habit_activity_log.id")?,
        habit_id: parse_uuid(&row.habit_id, "habit_activity_log.habit_id")?,
        activity: row.activity,
        created_at: parse_timestamp(row.created_at, "habit_activity_log.created_at")?,
    })
}

pub struct ActivityLogRepository;

impl ActivityLogRepository {
    pub async fn create<'e, E>(executor: E, activity: &HabitActivity) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
              INSERT INTO habit_activity_log (id, habit_id, activity, created_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(activity.id.to_string())
        .bind(activity.habit_id.to_string())
        .bind(&activity.activity)
        .bind(activity.created_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_habit<'e, E>(
        executor: E,
        habit_id: Uuid,
    ) -> DbErrorResult<Vec<HabitActivity>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, HabitActivityRow>(
            r#"
              SELECT id, habit_id, activity, created_at
              FROM habit_activity_log
              WHERE habit_id = ?
              ORDER BY created_at DESC
              "#,
        )
        .bind(habit_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(activity_from_row).collect()
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Audit record appended when a habit changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitActivity {
    pub id: Uuid,
    pub habit_id: Uuid,
    pub activity: String,
    pub created_at: DateTime<Utc>,
}

impl HabitActivity {
    pub fn new(habit_id: Uuid, activity: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            habit_id,
            activity,
            created_at: Utc::now(),
        }
    }

    /// Record written alongside habit creation
    pub fn created(habit_id: Uuid) -> Self {
        Self::new(habit_id, "created".to_string())
    }
}

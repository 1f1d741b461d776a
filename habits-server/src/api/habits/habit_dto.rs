use habits_core::Habit;

use serde::Serialize;

/// Habit DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct HabitDto {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub streak: i64,
    pub last_claimed_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Habit> for HabitDto {
    fn from(h: Habit) -> Self {
        Self {
            id: h.id.to_string(),
            owner_id: h.owner_id.to_string(),
            name: h.name,
            streak: h.streak,
            last_claimed_at: h.last_claimed_at.map(|t| t.timestamp()),
            created_at: h.created_at.timestamp(),
            updated_at: h.updated_at.timestamp(),
        }
    }
}

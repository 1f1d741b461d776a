use habits_core::Habit;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Whole-second instant so values survive the epoch-second round trip
pub fn test_instant(offset_secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000 + offset_secs, 0).expect("valid test instant")
}

pub fn create_test_habit(owner_id: Uuid) -> Habit {
    let mut habit = Habit::new(owner_id, "Morning run".to_string());
    habit.created_at = test_instant(0);
    habit.updated_at = test_instant(0);
    habit
}

pub fn create_claimed_test_habit(
    owner_id: Uuid,
    streak: i64,
    last_claimed_at: DateTime<Utc>,
) -> Habit {
    let mut habit = create_test_habit(owner_id);
    habit.streak = streak;
    habit.last_claimed_at = Some(last_claimed_at);
    habit
}

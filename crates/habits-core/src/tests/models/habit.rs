use crate::Habit;

use chrono::Utc;
use uuid::Uuid;

#[test]
fn test_habit_new() {
    let owner_id = Uuid::new_v4();
    let habit = Habit::new(owner_id, "Morning run".to_string());

    assert_eq!(habit.owner_id, owner_id);
    assert_eq!(habit.name, "Morning run");
    assert_eq!(habit.streak, 0);
    assert_eq!(habit.last_claimed_at, None);
    assert_eq!(habit.created_at, habit.updated_at);
    assert!(habit.never_claimed());
}

#[test]
fn test_habit_never_claimed() {
    let mut habit = Habit::new(Uuid::new_v4(), "Read".to_string());

    assert!(habit.never_claimed());

    habit.last_claimed_at = Some(Utc::now());
    assert!(!habit.never_claimed());
}

#[test]
fn test_habit_is_owned_by() {
    let owner_id = Uuid::new_v4();
    let habit = Habit::new(owner_id, "Stretch".to_string());

    assert!(habit.is_owned_by(owner_id));
    assert!(!habit.is_owned_by(Uuid::new_v4()));
}

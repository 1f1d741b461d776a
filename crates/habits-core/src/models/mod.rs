pub mod habit;
pub mod habit_activity;
pub mod user_settings;

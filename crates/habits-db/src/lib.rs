pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::activity_log_repository::ActivityLogRepository;
pub use repositories::habit_repository::HabitRepository;
pub use repositories::user_settings_repository::UserSettingsRepository;

pub mod clock;
pub mod error;
pub mod models;
pub mod streak;
pub mod validate;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CoreError, Result};
pub use models::habit::Habit;
pub use models::habit_activity::HabitActivity;
pub use models::user_settings::UserSettings;

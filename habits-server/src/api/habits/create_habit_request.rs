use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateHabitRequest {
    /// Habit name (required)
    pub name: String,
}

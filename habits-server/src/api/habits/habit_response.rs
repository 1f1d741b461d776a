use crate::HabitDto;
use serde::Serialize;

/// Single habit response
#[derive(Debug, Serialize)]
pub struct HabitResponse {
    pub habit: HabitDto,
}

pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;
pub mod sweep;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::owner_id::OwnerId,
    habits::{
        create_habit_request::CreateHabitRequest,
        habit_dto::HabitDto,
        habit_list_response::HabitListResponse,
        habit_response::HabitResponse,
        habits::{claim_habit, create_habit, delete_habit, get_habit, list_habits},
    },
    settings::{
        save_settings_request::SaveSettingsRequest,
        settings::{get_settings, save_settings},
        settings_dto::SettingsDto,
        settings_response::SettingsResponse,
    },
    tasks::tasks::run_expiry_sweep,
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
pub use crate::sweep::{ExpirySweep, SweepSummary};

use habits_core::UserSettings;

use serde::Serialize;

/// User settings DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct SettingsDto {
    pub owner_id: String,
    pub time_zone: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<UserSettings> for SettingsDto {
    fn from(s: UserSettings) -> Self {
        Self {
            owner_id: s.owner_id.to_string(),
            time_zone: s.time_zone,
            created_at: s.created_at.timestamp(),
            updated_at: s.updated_at.timestamp(),
        }
    }
}

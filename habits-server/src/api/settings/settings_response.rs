use crate::SettingsDto;
use serde::Serialize;

/// User settings response
#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub settings: SettingsDto,
}

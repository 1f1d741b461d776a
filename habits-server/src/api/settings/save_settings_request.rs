use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SaveSettingsRequest {
    /// IANA zone name, e.g., "America/Phoenix" (required)
    pub time_zone: String,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-user settings, one row per owner.
///
/// `time_zone` is an IANA name ("America/Phoenix"). It is validated against
/// the zone database when saved, so stored values are expected to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub owner_id: Uuid,
    pub time_zone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserSettings {
    pub fn new(owner_id: Uuid, time_zone: String) -> Self {
        let now = Utc::now();
        Self {
            owner_id,
            time_zone,
            created_at: now,
            updated_at: now,
        }
    }
}

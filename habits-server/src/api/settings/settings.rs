//! User settings REST API handlers

use crate::state::AppState;
use crate::{ApiError, ApiResult, OwnerId, SaveSettingsRequest, SettingsResponse};

use habits_core::streak;
use habits_db::UserSettingsRepository;

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/user/settings
///
/// Get the caller's stored preferences. 404 until first saved.
pub async fn get_settings(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
) -> ApiResult<Json<SettingsResponse>> {
    let repo = UserSettingsRepository::new(state.pool.clone());
    let settings = repo
        .find_by_owner(owner_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("No settings stored for owner {}", owner_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(SettingsResponse {
        settings: settings.into(),
    }))
}

/// PUT /api/v1/user/settings
///
/// Save the caller's time zone, creating or replacing the stored row.
pub async fn save_settings(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
    Json(req): Json<SaveSettingsRequest>,
) -> ApiResult<Json<SettingsResponse>> {
    // 1. Reject unknown zone names before touching the database
    let tz = streak::parse_time_zone(&req.time_zone)?;

    // 2. Upsert keyed by owner
    let repo = UserSettingsRepository::new(state.pool.clone());
    let settings = repo.upsert(owner_id, tz.name(), state.clock.now()).await?;

    log::info!("Saved time zone {} for owner {}", settings.time_zone, owner_id);

    Ok(Json(SettingsResponse {
        settings: settings.into(),
    }))
}

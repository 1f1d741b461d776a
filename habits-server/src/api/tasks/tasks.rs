//! Maintenance task handlers

use crate::state::AppState;
use crate::sweep::{ExpirySweep, SweepSummary};
use crate::{ApiError, ApiResult};

use std::panic::Location;

use axum::{Json, extract::State, http::HeaderMap, http::header};
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/tasks/expire-streaks
///
/// Run the streak expiry sweep. Guarded by a bearer key shared with the
/// scheduler; a server without a configured key accepts no sweep requests.
pub async fn run_expiry_sweep(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<SweepSummary>> {
    // 1. The Authorization header must carry a bearer token
    let presented = bearer_token(&headers).ok_or_else(|| ApiError::Unauthorized {
        message: "Missing or malformed Authorization header".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    // 2. An unconfigured key rejects everything rather than accepting anything
    let expected = state.sweep.key.as_deref().ok_or_else(|| {
        log::warn!("Expiry sweep requested but no sweep key is configured");
        ApiError::Forbidden {
            message: "Expiry sweep is not enabled".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    // 3. Compare keys
    if presented != expected {
        return Err(ApiError::Forbidden {
            message: "Invalid sweep key".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // 4. Run the sweep and report its counters
    let sweep = ExpirySweep::new(
        state.pool.clone(),
        state.clock.clone(),
        state.sweep.concurrency,
    );
    let summary = sweep.run().await?;

    Ok(Json(summary))
}

/// Extract the token from an `Authorization: Bearer <token>` header.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

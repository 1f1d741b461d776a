//! Axum extractors for REST API identity

use crate::ApiError;
use crate::state::AppState;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;
use uuid::Uuid;

/// Extracts the owner ID from the `X-Owner-Id` header
///
/// Authentication itself happens upstream; this layer only trusts the
/// header the proxy forwards. Requests without a parseable UUID are
/// rejected before any handler runs.
pub struct OwnerId(pub Uuid);

impl FromRequestParts<AppState> for OwnerId {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header_value =
                parts
                    .headers
                    .get("X-Owner-Id")
                    .ok_or_else(|| ApiError::Unauthorized {
                        message: "Missing X-Owner-Id header".to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    })?;

            let owner_id_str = header_value.to_str().map_err(|_| ApiError::Unauthorized {
                message: "X-Owner-Id header is not valid UTF-8".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let owner_id = Uuid::parse_str(owner_id_str).map_err(|_| {
                log::warn!("Invalid UUID in X-Owner-Id header: {}", owner_id_str);
                ApiError::Unauthorized {
                    message: "X-Owner-Id header must be a UUID".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

            Ok(OwnerId(owner_id))
        }
    }
}

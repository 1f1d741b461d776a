//! Habit REST API handlers
//!
//! Streak rules are civil-date based: a habit can be claimed once per
//! calendar day as observed in the owner's stored time zone.

use crate::state::AppState;
use crate::{
    ApiError, ApiResult, CreateHabitRequest, HabitDto, HabitListResponse, HabitResponse, OwnerId,
};

use habits_core::streak;
use habits_core::validate::validate_habit_name;
use habits_core::{Habit, HabitActivity};
use habits_db::{ActivityLogRepository, HabitRepository, UserSettingsRepository};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use error_location::ErrorLocation;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/habits
///
/// List the caller's habits in creation order.
pub async fn list_habits(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
) -> ApiResult<Json<HabitListResponse>> {
    let habits = HabitRepository::find_by_owner(&state.pool, owner_id).await?;

    Ok(Json(HabitListResponse {
        habits: habits.into_iter().map(HabitDto::from).collect(),
    }))
}

/// POST /api/v1/habits
///
/// Create a new habit with a zeroed streak.
pub async fn create_habit(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
    Json(req): Json<CreateHabitRequest>,
) -> ApiResult<Json<HabitResponse>> {
    // 1. Validate input fields
    let name = validate_habit_name(&req.name)?;

    // 2. Build habit
    let now = state.clock.now();
    let habit = Habit {
        id: Uuid::new_v4(),
        owner_id,
        name,
        streak: 0,
        last_claimed_at: None,
        created_at: now,
        updated_at: now,
    };

    // 3. Execute transaction (habit + activity entry commit together)
    let activity = HabitActivity::created(habit.id);

    let mut tx = state.pool.begin().await?;
    HabitRepository::create(&mut *tx, &habit).await?;
    ActivityLogRepository::create(&mut *tx, &activity).await?;
    tx.commit().await?;

    log::info!("Created habit {} for owner {}", habit.id, owner_id);

    Ok(Json(HabitResponse {
        habit: habit.into(),
    }))
}

/// GET /api/v1/habits/{id}
///
/// Get a single habit by ID
pub async fn get_habit(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<String>,
) -> ApiResult<Json<HabitResponse>> {
    let habit_id = Uuid::parse_str(&id)?;

    // 1. Fetch habit
    let habit = HabitRepository::find_by_id(&state.pool, habit_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Habit {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    // 2. Enforce ownership
    if !habit.is_owned_by(owner_id) {
        return Err(ApiError::Forbidden {
            message: format!("Habit {} belongs to another owner", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(Json(HabitResponse {
        habit: habit.into(),
    }))
}

/// DELETE /api/v1/habits/{id}
///
/// Delete a habit and return its final state.
pub async fn delete_habit(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<String>,
) -> ApiResult<Json<HabitResponse>> {
    let habit_id = Uuid::parse_str(&id)?;

    // 1. Fetch existing habit
    let habit = HabitRepository::find_by_id(&state.pool, habit_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Habit {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    // 2. Enforce ownership
    if !habit.is_owned_by(owner_id) {
        return Err(ApiError::Forbidden {
            message: format!("Habit {} belongs to another owner", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // 3. Hard delete (activity entries cascade with the habit row)
    HabitRepository::delete(&state.pool, habit_id).await?;

    log::info!("Deleted habit {} for owner {}", habit_id, owner_id);

    Ok(Json(HabitResponse {
        habit: habit.into(),
    }))
}

/// POST /api/v1/habits/{id}/claim
///
/// Claim today's completion and advance the streak. At most one claim
/// per civil day succeeds.
pub async fn claim_habit(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
    Path(id): Path<String>,
) -> ApiResult<Json<HabitResponse>> {
    let habit_id = Uuid::parse_str(&id)?;

    // 1. Fetch habit
    let habit = HabitRepository::find_by_id(&state.pool, habit_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Habit {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    // 2. Enforce ownership
    if !habit.is_owned_by(owner_id) {
        return Err(ApiError::Forbidden {
            message: format!("Habit {} belongs to another owner", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // 3. Resolve the owner's time zone
    let settings_repo = UserSettingsRepository::new(state.pool.clone());
    let settings = settings_repo
        .find_by_owner(owner_id)
        .await?
        .ok_or_else(|| ApiError::MissingTimeZone {
            message: "Set a time zone before claiming habits".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
    let tz = streak::parse_time_zone(&settings.time_zone)?;

    // 4. Check eligibility against the civil date in the owner's zone
    let now = state.clock.now();
    if !streak::can_claim(habit.last_claimed_at, tz, now) {
        return Err(ApiError::AlreadyClaimed {
            message: format!("Habit {} was already claimed today", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // 5. Advance the streak, re-asserting the observed last_claimed_at so
    //    a concurrent claim cannot double-increment
    let claimed =
        HabitRepository::claim(&state.pool, habit_id, habit.last_claimed_at, now).await?;
    if !claimed {
        return Err(ApiError::AlreadyClaimed {
            message: format!("Habit {} was already claimed today", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // 6. Return the updated habit
    let habit = HabitRepository::find_by_id(&state.pool, habit_id)
        .await?
        .ok_or_else(|| ApiError::Internal {
            message: format!("Habit {} missing after claim", habit_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    log::info!("Claimed habit {} (streak {})", habit.id, habit.streak);

    Ok(Json(HabitResponse {
        habit: habit.into(),
    }))
}

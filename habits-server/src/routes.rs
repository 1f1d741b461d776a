use crate::health;
use crate::state::AppState;
use crate::{
    claim_habit, create_habit, delete_habit, get_habit, get_settings, list_habits,
    run_expiry_sweep, save_settings,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Habit endpoints
        .route("/api/v1/habits", get(list_habits).post(create_habit))
        .route("/api/v1/habits/{id}", get(get_habit).delete(delete_habit))
        .route("/api/v1/habits/{id}/claim", post(claim_habit))
        // User settings endpoints
        .route(
            "/api/v1/user/settings",
            get(get_settings).put(save_settings),
        )
        // Maintenance endpoints
        .route("/api/v1/tasks/expire-streaks", post(run_expiry_sweep))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins for the web client)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

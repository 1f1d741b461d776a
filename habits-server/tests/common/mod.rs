#![allow(dead_code)]

//! Test infrastructure for habits-server API tests

use habits_server::AppState;

use habits_core::{Clock, FixedClock, SystemClock};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use habits_config::SweepConfig;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

/// Sweep key wired into every test AppState
pub const TEST_SWEEP_KEY: &str = "test-sweep-key";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/habits-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing on the system clock
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    test_state(pool, Arc::new(SystemClock))
}

/// Create AppState pinned to a fixed instant
pub async fn create_test_app_state_at(now: DateTime<Utc>) -> AppState {
    let pool = create_test_pool().await;
    test_state(pool, Arc::new(FixedClock::new(now)))
}

fn test_state(pool: SqlitePool, clock: Arc<dyn Clock>) -> AppState {
    AppState {
        pool,
        clock,
        sweep: SweepConfig {
            key: Some(TEST_SWEEP_KEY.to_string()),
            ..SweepConfig::default()
        },
    }
}

/// Store a time zone preference for an owner
pub async fn create_test_settings(pool: &SqlitePool, owner_id: Uuid, time_zone: &str) {
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO user_settings (owner_id, time_zone, created_at, updated_at) VALUES (?, ?, ?, ?)",
    )
    .bind(owner_id.to_string())
    .bind(time_zone)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test settings");
}

/// Create a never-claimed habit row
pub async fn create_test_habit(pool: &SqlitePool, owner_id: Uuid, name: &str) -> Uuid {
    let habit_id = Uuid::new_v4();
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        r#"
        INSERT INTO habits (id, owner_id, name, streak, last_claimed_at, created_at, updated_at)
        VALUES (?, ?, ?, 0, NULL, ?, ?)"#,
    )
    .bind(habit_id.to_string())
    .bind(owner_id.to_string())
    .bind(name)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test habit");

    habit_id
}

/// Create a habit row with an existing claim history
pub async fn create_claimed_test_habit(
    pool: &SqlitePool,
    owner_id: Uuid,
    name: &str,
    streak: i64,
    last_claimed_at: i64,
) -> Uuid {
    let habit_id = Uuid::new_v4();
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        r#"
        INSERT INTO habits (id, owner_id, name, streak, last_claimed_at, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)"#,
    )
    .bind(habit_id.to_string())
    .bind(owner_id.to_string())
    .bind(name)
    .bind(streak)
    .bind(last_claimed_at)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test habit");

    habit_id
}

use crate::state::AppState;
use crate::{ApiError, OwnerId};

use habits_core::SystemClock;

use std::sync::Arc;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use habits_config::SweepConfig;
use sqlx::SqlitePool;

async fn create_test_state() -> AppState {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("../crates/habits-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    AppState {
        pool,
        clock: Arc::new(SystemClock),
        sweep: SweepConfig::default(),
    }
}

#[tokio::test]
async fn test_extractor_with_valid_header() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header("X-Owner-Id", "12345678-1234-1234-1234-123456789abc")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = OwnerId::from_request_parts(&mut parts, &state).await;

    assert!(result.is_ok());
    assert_eq!(
        result.unwrap().0.to_string(),
        "12345678-1234-1234-1234-123456789abc"
    );
}

#[tokio::test]
async fn test_extractor_rejects_missing_header() {
    let state = create_test_state().await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = OwnerId::from_request_parts(&mut parts, &state).await;

    match result {
        Err(ApiError::Unauthorized { message, .. }) => {
            assert!(message.contains("Missing X-Owner-Id"));
        }
        _ => panic!("Expected Unauthorized rejection"),
    }
}

#[tokio::test]
async fn test_extractor_rejects_invalid_uuid() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header("X-Owner-Id", "not-a-valid-uuid")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = OwnerId::from_request_parts(&mut parts, &state).await;

    match result {
        Err(ApiError::Unauthorized { message, .. }) => {
            assert!(message.contains("must be a UUID"));
        }
        _ => panic!("Expected Unauthorized rejection"),
    }
}

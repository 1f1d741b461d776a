use crate::api::tasks::tasks::bearer_token;

use axum::http::{HeaderMap, HeaderValue, header};

#[test]
fn test_bearer_token_extracts_token() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer sweep-key-123"));

    assert_eq!(bearer_token(&headers), Some("sweep-key-123"));
}

#[test]
fn test_bearer_token_missing_header() {
    let headers = HeaderMap::new();

    assert_eq!(bearer_token(&headers), None);
}

#[test]
fn test_bearer_token_rejects_other_schemes() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));

    assert_eq!(bearer_token(&headers), None);
}

#[test]
fn test_bearer_token_rejects_bare_scheme() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer"));

    assert_eq!(bearer_token(&headers), None);
}

#[test]
fn test_bearer_token_is_case_sensitive() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("bearer sweep-key-123"));

    assert_eq!(bearer_token(&headers), None);
}

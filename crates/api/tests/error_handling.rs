//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code, error code, and body. They do NOT need an HTTP server --
//! they call `IntoResponse` directly on `AppError` values.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use taskmanager_api::error::{AppError, UNEXPECTED_ERROR_MESSAGE};
use taskmanager_api::services::TaskServiceError;
use taskmanager_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with the not-found message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Task",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "Task not found with id: 42");
    assert_eq!(json["status"], 404);
    assert!(json["timestamp"].is_string());
    assert!(json.get("details").is_none());
}

// ---------------------------------------------------------------------------
// Test: service errors convert into the matching AppError variant
// ---------------------------------------------------------------------------

#[tokio::test]
async fn service_not_found_converts_to_404() {
    let err: AppError = TaskServiceError::Core(CoreError::NotFound {
        entity: "Task",
        id: 1,
    })
    .into();

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Task not found with id: 1");
}

#[tokio::test]
async fn service_store_error_converts_to_500_with_details() {
    let err: AppError = TaskServiceError::Store(sqlx::Error::PoolTimedOut).into();

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["message"], UNEXPECTED_ERROR_MESSAGE);
    assert_eq!(json["details"], sqlx::Error::PoolTimedOut.to_string());
    assert_eq!(json["status"], 500);
    assert!(json["timestamp"].is_string());
}

// ---------------------------------------------------------------------------
// Test: AppError::InternalError maps to 500 with the generic message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_returns_500_with_details() {
    let err = AppError::InternalError("Unexpected error".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "An unexpected error occurred");
    assert_eq!(json["details"], "Unexpected error");
    assert_eq!(json["status"], 500);
}

// ---------------------------------------------------------------------------
// Test: AppError::BadRequest maps to 400 with BAD_REQUEST code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["message"], "invalid field value");
    assert_eq!(json["status"], 400);
}

// ---------------------------------------------------------------------------
// Test: a stray sqlx RowNotFound is an unexpected error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn row_not_found_returns_500() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["message"], "An unexpected error occurred");
    assert!(json["details"].is_string());
}

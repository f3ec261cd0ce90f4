//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code, error code, and message. They do NOT need an HTTP server --
//! they call `IntoResponse` directly on `AppError` values.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use ludo_api::error::AppError;
use ludo_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::InvalidInput maps to 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_input_returns_400() {
    let err = AppError::Core(CoreError::InvalidInput(
        "daysRented must be a positive integer".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_INPUT");
    assert_eq!(json["error"], "daysRented must be a positive integer");
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "rental",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "rental 42 does not exist");
}

// ---------------------------------------------------------------------------
// Test: missing customer or game on create maps to 400, not 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_reference_returns_400() {
    let err = AppError::Core(CoreError::UnknownReference {
        entity: "game",
        id: 7,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "UNKNOWN_REFERENCE");
    assert_eq!(json["error"], "game 7 does not exist");
}

#[tokio::test]
async fn no_stock_returns_400_with_user_message() {
    let err = AppError::Core(CoreError::NoStockAvailable { game_id: 3 });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "NO_STOCK_AVAILABLE");
    assert_eq!(json["error"], "all units already rented");
}

#[tokio::test]
async fn already_closed_returns_400() {
    let err = AppError::Core(CoreError::AlreadyClosed { rental_id: 9 });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "ALREADY_CLOSED");
    assert_eq!(json["error"], "rental already finished");
}

// ---------------------------------------------------------------------------
// Test: store errors surface as 500 with the store's message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn database_error_returns_500_with_store_message() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "DATABASE_ERROR");
    assert_eq!(json["error"], sqlx::Error::PoolTimedOut.to_string());
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

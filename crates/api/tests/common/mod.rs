#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use ludo_api::app::build_app;
use ludo_api::config::ServerConfig;
use ludo_api::services::RentalService;
use ludo_api::state::AppState;
use ludo_core::clock::FixedClock;
use ludo_db::models::customer::CreateCustomer;
use ludo_db::models::game::CreateGame;
use ludo_db::repositories::{CustomerRepo, GameRepo};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        database_url: String::new(),
        database_max_connections: 5,
    }
}

/// The date every test app reports as "today" unless told otherwise.
pub fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
}

/// `base_date()` shifted forward by `days`.
pub fn days_after_base(days: u64) -> NaiveDate {
    base_date()
        .checked_add_days(chrono::Days::new(days))
        .unwrap()
}

/// Build the full application router whose clock is pinned to `today`.
///
/// Uses the same middleware stack as production via [`build_app`].
pub fn build_test_app_on(pool: PgPool, today: NaiveDate) -> Router {
    let rentals = Arc::new(RentalService::new(
        pool.clone(),
        Arc::new(FixedClock(today)),
    ));
    build_app(AppState {
        pool,
        config: Arc::new(test_config()),
        rentals,
    })
}

/// Build the application router with the clock pinned to [`base_date`].
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_on(pool, base_date())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: Router, uri: &str) -> Response {
    send(app, Method::POST, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn seed_customer(pool: &PgPool, name: &str) -> i64 {
    CustomerRepo::create(
        pool,
        &CreateCustomer {
            name: name.to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

pub async fn seed_game(pool: &PgPool, name: &str, stock_total: i32, price_per_day: i64) -> i64 {
    GameRepo::create(
        pool,
        &CreateGame {
            name: name.to_string(),
            stock_total,
            price_per_day,
        },
    )
    .await
    .unwrap()
    .id
}

//! Liveness and database reachability for the rentals service.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
struct PoolReport {
    reachable: bool,
    /// Connections currently open, busy or idle.
    connections: u32,
    idle: usize,
}

#[derive(Debug, Serialize)]
struct HealthReport {
    status: &'static str,
    version: &'static str,
    database: PoolReport,
}

/// GET /health
///
/// 200 while the store answers `SELECT 1`, 503 otherwise. The body is the
/// same in both cases.
async fn report(State(state): State<AppState>) -> impl IntoResponse {
    let reachable = match ludo_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            false
        }
    };

    let (code, status) = if reachable {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let body = HealthReport {
        status,
        version: env!("CARGO_PKG_VERSION"),
        database: PoolReport {
            reachable,
            connections: state.pool.size(),
            idle: state.pool.num_idle(),
        },
    };

    (code, Json(body))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}

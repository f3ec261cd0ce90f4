pub mod health;
pub mod rental;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /rentals                                         list, create
/// /rentals/{id}                                    get, delete
/// /rentals/{id}/return                             close (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/rentals", rental::router())
}

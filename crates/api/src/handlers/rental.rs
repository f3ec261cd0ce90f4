//! Handlers for the `/rentals` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use ludo_core::error::CoreError;
use ludo_core::rental::NewRental;
use ludo_core::types::{Cents, DbId};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::query::RentalFilterParams;
use crate::state::AppState;

/// Request body for `POST /rentals`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRentalRequest {
    pub customer_id: DbId,
    pub game_id: DbId,
    #[validate(range(min = 1, message = "daysRented must be a positive integer"))]
    pub days_rented: i32,
    #[serde(default, with = "ludo_core::dates::day_month_year::option")]
    pub return_date: Option<NaiveDate>,
    #[validate(range(min = 0, message = "delayFee must not be negative"))]
    pub delay_fee: Option<Cents>,
}

impl From<CreateRentalRequest> for NewRental {
    fn from(body: CreateRentalRequest) -> Self {
        Self {
            customer_id: body.customer_id,
            game_id: body.game_id,
            days_rented: body.days_rented,
            return_date: body.return_date,
            delay_fee: body.delay_fee.unwrap_or(0),
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /rentals
///
/// Open a rental. Responds 201 with an empty body.
///
/// A body that does not deserialize (missing ids, fractional or textual
/// `daysRented`, wrong content type) is an `InvalidInput` like any other
/// validation failure.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateRentalRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(body) = body.map_err(|rejection| CoreError::InvalidInput(rejection.body_text()))?;
    body.validate()
        .map_err(|e| CoreError::InvalidInput(e.to_string()))?;

    let rental = state.rentals.create_rental(&body.into()).await?;

    tracing::info!(
        rental_id = rental.id,
        customer_id = rental.customer_id,
        game_id = rental.game_id,
        original_price = rental.original_price,
        "Rental created"
    );

    Ok(StatusCode::CREATED)
}

/// GET /rentals?gameId=&customerId=
///
/// List rentals. `gameId` takes precedence when both filters are given.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RentalFilterParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.to_filter()?;
    let rentals = state.rentals.list_rentals(filter).await?;

    tracing::debug!(?filter, count = rentals.len(), "Listed rentals");

    Ok(Json(rentals))
}

/// GET /rentals/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let rental = state.rentals.get_rental(id).await?;
    Ok(Json(rental))
}

/// POST /rentals/{id}/return
///
/// Record the return and compute the delay fee. Responds 200 with an empty body.
pub async fn close(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let rental = state.rentals.close_rental(id).await?;

    tracing::info!(
        rental_id = rental.id,
        delay_fee = rental.delay_fee,
        "Rental returned"
    );

    Ok(StatusCode::OK)
}

/// DELETE /rentals/{id}
///
/// Delete an open rental. Responds 200 with an empty body.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.rentals.delete_rental(id).await?;

    tracing::info!(rental_id = id, "Rental deleted");

    Ok(StatusCode::OK)
}

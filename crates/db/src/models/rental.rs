//! Rental entity model and DTOs.
//!
//! Serialized in camelCase with `DD/MM/YYYY` dates, which is the shape the
//! HTTP API exposes.

use chrono::NaiveDate;
use ludo_core::types::{Cents, DbId};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `rentals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: DbId,
    pub customer_id: DbId,
    pub game_id: DbId,
    #[serde(with = "ludo_core::dates::day_month_year")]
    pub rent_date: NaiveDate,
    pub days_rented: i32,
    /// `None` while the game is still out.
    #[serde(with = "ludo_core::dates::day_month_year::option")]
    pub return_date: Option<NaiveDate>,
    pub original_price: Cents,
    pub delay_fee: Cents,
}

impl Rental {
    pub fn is_open(&self) -> bool {
        self.return_date.is_none()
    }
}

/// A rental joined with its game's current daily price, as needed to close it.
#[derive(Debug, Clone, FromRow)]
pub struct RentalWithPrice {
    pub id: DbId,
    pub rent_date: NaiveDate,
    pub days_rented: i32,
    pub return_date: Option<NaiveDate>,
    pub price_per_day: Cents,
}

/// DTO for inserting a rental. All derived values are computed by the caller.
#[derive(Debug, Clone)]
pub struct CreateRental {
    pub customer_id: DbId,
    pub game_id: DbId,
    pub rent_date: NaiveDate,
    pub days_rented: i32,
    pub return_date: Option<NaiveDate>,
    pub original_price: Cents,
    pub delay_fee: Cents,
}

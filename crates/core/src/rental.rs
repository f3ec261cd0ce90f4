//! Rental lifecycle rules: input validation, pricing, stock and late fees.
//!
//! These functions hold no state. The service layer reads the relevant rows
//! inside a transaction and asks this module what to write back.

use chrono::NaiveDate;

use crate::error::CoreError;
use crate::types::{Cents, DbId};

/// Validated input for opening a new rental.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRental {
    pub customer_id: DbId,
    pub game_id: DbId,
    pub days_rented: i32,
    /// Normally `None`; stored verbatim when supplied.
    pub return_date: Option<NaiveDate>,
    /// Normally `0`; stored verbatim when supplied.
    pub delay_fee: Cents,
}

/// Which subset of rentals a listing returns.
///
/// When both ids are supplied the game filter wins and the customer filter
/// is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RentalFilter {
    All,
    Game(DbId),
    Customer(DbId),
}

impl RentalFilter {
    pub fn from_query(game_id: Option<DbId>, customer_id: Option<DbId>) -> Self {
        match (game_id, customer_id) {
            (Some(game_id), _) => Self::Game(game_id),
            (None, Some(customer_id)) => Self::Customer(customer_id),
            (None, None) => Self::All,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// The agreed rental duration must be at least one day.
pub fn validate_days_rented(days_rented: i32) -> Result<(), CoreError> {
    if days_rented <= 0 {
        return Err(CoreError::InvalidInput(format!(
            "daysRented must be a positive integer, got {days_rented}"
        )));
    }
    Ok(())
}

/// A game may not have more open rentals than units in stock.
pub fn ensure_stock_available(
    game_id: DbId,
    open_rentals: i64,
    stock_total: i32,
) -> Result<(), CoreError> {
    if open_rentals >= i64::from(stock_total) {
        return Err(CoreError::NoStockAvailable { game_id });
    }
    Ok(())
}

/// Closing and deleting are only allowed while no return date is recorded.
pub fn ensure_open(rental_id: DbId, return_date: Option<NaiveDate>) -> Result<(), CoreError> {
    match return_date {
        Some(_) => Err(CoreError::AlreadyClosed { rental_id }),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

/// Price agreed at creation: daily price times the rented days.
pub fn original_price(price_per_day: Cents, days_rented: i32) -> Result<Cents, CoreError> {
    price_per_day
        .checked_mul(Cents::from(days_rented))
        .ok_or_else(|| price_out_of_range(price_per_day, i64::from(days_rented)))
}

/// Whole days elapsed between renting and returning.
pub fn days_elapsed(rent_date: NaiveDate, returned_on: NaiveDate) -> i64 {
    (returned_on - rent_date).num_days()
}

/// Fee charged at return.
///
/// Zero when the game comes back within the agreed days. Otherwise every
/// elapsed day is charged at the daily price, not only the overdue ones.
pub fn delay_fee(
    price_per_day: Cents,
    days_rented: i32,
    rent_date: NaiveDate,
    returned_on: NaiveDate,
) -> Result<Cents, CoreError> {
    let elapsed = days_elapsed(rent_date, returned_on);
    if elapsed <= i64::from(days_rented) {
        return Ok(0);
    }
    price_per_day
        .checked_mul(elapsed)
        .ok_or_else(|| price_out_of_range(price_per_day, elapsed))
}

fn price_out_of_range(price_per_day: Cents, days: i64) -> CoreError {
    CoreError::InvalidInput(format!(
        "price of {days} days at {price_per_day} per day is out of range"
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

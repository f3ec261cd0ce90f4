//! Rental lifecycle service.
//!
//! Every operation that reads before it writes runs inside one transaction
//! and locks the rows it decides on, so the stock limit and the terminal
//! "returned" state hold under concurrent requests.

use std::sync::Arc;

use ludo_core::clock::Clock;
use ludo_core::error::CoreError;
use ludo_core::rental::{self, NewRental, RentalFilter};
use ludo_core::types::DbId;
use ludo_db::models::rental::{CreateRental, Rental};
use ludo_db::repositories::{CustomerRepo, GameRepo, RentalRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Creates, lists, closes and deletes rentals.
///
/// Held in [`AppState`](crate::state::AppState) as an `Arc<RentalService>`.
pub struct RentalService {
    pool: PgPool,
    clock: Arc<dyn Clock>,
}

impl RentalService {
    pub fn new(pool: PgPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }

    /// Open a rental for an existing customer and game.
    ///
    /// 1. Validate the agreed duration.
    /// 2. Check the customer exists.
    /// 3. Lock the game and check a unit is free.
    /// 4. Price the rental and insert it dated today.
    pub async fn create_rental(&self, input: &NewRental) -> AppResult<Rental> {
        rental::validate_days_rented(input.days_rented)?;

        let mut tx = self.pool.begin().await?;

        if !CustomerRepo::exists_in_tx(&mut tx, input.customer_id).await? {
            return Err(CoreError::UnknownReference {
                entity: "customer",
                id: input.customer_id,
            }
            .into());
        }

        let game = GameRepo::lock_in_tx(&mut tx, input.game_id)
            .await?
            .ok_or(CoreError::UnknownReference {
                entity: "game",
                id: input.game_id,
            })?;

        let open = RentalRepo::count_open_for_game_in_tx(&mut tx, game.id).await?;
        rental::ensure_stock_available(game.id, open, game.stock_total)?;

        let row = CreateRental {
            customer_id: input.customer_id,
            game_id: game.id,
            rent_date: self.clock.today(),
            days_rented: input.days_rented,
            return_date: input.return_date,
            original_price: rental::original_price(game.price_per_day, input.days_rented)?,
            delay_fee: input.delay_fee,
        };
        let created = RentalRepo::create_in_tx(&mut tx, &row).await?;

        tx.commit().await?;
        Ok(created)
    }

    /// List rentals, narrowed by game or customer.
    pub async fn list_rentals(&self, filter: RentalFilter) -> AppResult<Vec<Rental>> {
        Ok(RentalRepo::list(&self.pool, filter).await?)
    }

    /// Fetch a single rental.
    pub async fn get_rental(&self, id: DbId) -> AppResult<Rental> {
        RentalRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| rental_not_found(id))
    }

    /// Record the return of an open rental and charge any late fee.
    pub async fn close_rental(&self, id: DbId) -> AppResult<Rental> {
        let mut tx = self.pool.begin().await?;

        let current = RentalRepo::lock_with_price_in_tx(&mut tx, id)
            .await?
            .ok_or_else(|| rental_not_found(id))?;
        rental::ensure_open(current.id, current.return_date)?;

        let today = self.clock.today();
        let fee = rental::delay_fee(
            current.price_per_day,
            current.days_rented,
            current.rent_date,
            today,
        )?;

        let closed = RentalRepo::close_in_tx(&mut tx, id, today, fee)
            .await?
            .ok_or(CoreError::AlreadyClosed { rental_id: id })?;

        tx.commit().await?;
        Ok(closed)
    }

    /// Delete a rental that has not been returned.
    pub async fn delete_rental(&self, id: DbId) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let current = RentalRepo::lock_in_tx(&mut tx, id)
            .await?
            .ok_or_else(|| rental_not_found(id))?;
        rental::ensure_open(current.id, current.return_date)?;

        if !RentalRepo::delete_open_in_tx(&mut tx, id).await? {
            return Err(CoreError::AlreadyClosed { rental_id: id }.into());
        }

        tx.commit().await?;
        Ok(())
    }
}

fn rental_not_found(id: DbId) -> AppError {
    CoreError::NotFound {
        entity: "rental",
        id,
    }
    .into()
}

//! Repository for the `rentals` table.

use chrono::NaiveDate;
use ludo_core::rental::RentalFilter;
use ludo_core::types::{Cents, DbId};
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::rental::{CreateRental, Rental, RentalWithPrice};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, customer_id, game_id, rent_date, days_rented, return_date, \
                       original_price, delay_fee";

/// Provides CRUD operations for rentals.
pub struct RentalRepo;

impl RentalRepo {
    /// Find a rental by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Rental>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rentals WHERE id = $1");
        sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List rentals matching a filter, ordered by ID.
    pub async fn list(pool: &PgPool, filter: RentalFilter) -> Result<Vec<Rental>, sqlx::Error> {
        match filter {
            RentalFilter::All => {
                let query = format!("SELECT {COLUMNS} FROM rentals ORDER BY id");
                sqlx::query_as::<_, Rental>(&query).fetch_all(pool).await
            }
            RentalFilter::Game(game_id) => {
                let query = format!("SELECT {COLUMNS} FROM rentals WHERE game_id = $1 ORDER BY id");
                sqlx::query_as::<_, Rental>(&query)
                    .bind(game_id)
                    .fetch_all(pool)
                    .await
            }
            RentalFilter::Customer(customer_id) => {
                let query =
                    format!("SELECT {COLUMNS} FROM rentals WHERE customer_id = $1 ORDER BY id");
                sqlx::query_as::<_, Rental>(&query)
                    .bind(customer_id)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    // -----------------------------------------------------------------------
    // Transactional helpers
    // -----------------------------------------------------------------------

    /// Count rentals of a game that have not been returned yet.
    pub async fn count_open_for_game_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        game_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM rentals WHERE game_id = $1 AND return_date IS NULL",
        )
        .bind(game_id)
        .fetch_one(&mut **tx)
        .await?;
        Ok(row.0)
    }

    /// Insert a new rental, returning the created row.
    pub async fn create_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        input: &CreateRental,
    ) -> Result<Rental, sqlx::Error> {
        let query = format!(
            "INSERT INTO rentals \
                (customer_id, game_id, rent_date, days_rented, return_date, original_price, delay_fee) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(input.customer_id)
            .bind(input.game_id)
            .bind(input.rent_date)
            .bind(input.days_rented)
            .bind(input.return_date)
            .bind(input.original_price)
            .bind(input.delay_fee)
            .fetch_one(&mut **tx)
            .await
    }

    /// Fetch a rental with a row lock held until the transaction ends.
    pub async fn lock_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<Option<Rental>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rentals WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Fetch a rental joined with its game's daily price, locking the rental row.
    pub async fn lock_with_price_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<Option<RentalWithPrice>, sqlx::Error> {
        sqlx::query_as::<_, RentalWithPrice>(
            "SELECT r.id, r.rent_date, r.days_rented, r.return_date, g.price_per_day \
             FROM rentals r \
             JOIN games g ON g.id = r.game_id \
             WHERE r.id = $1 \
             FOR UPDATE OF r",
        )
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
    }

    /// Record the return of a single open rental.
    ///
    /// Returns `None` if the rental does not exist or was already returned.
    pub async fn close_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
        return_date: NaiveDate,
        delay_fee: Cents,
    ) -> Result<Option<Rental>, sqlx::Error> {
        let query = format!(
            "UPDATE rentals SET return_date = $2, delay_fee = $3 \
             WHERE id = $1 AND return_date IS NULL \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .bind(return_date)
            .bind(delay_fee)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Delete a rental that has not been returned.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete_open_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rentals WHERE id = $1 AND return_date IS NULL")
            .bind(id)
            .execute(&mut **tx)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

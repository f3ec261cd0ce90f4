//! Repository for the `customers` table.

use ludo_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::customer::{CreateCustomer, Customer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides lookups for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCustomer) -> Result<Customer, sqlx::Error> {
        let query = format!("INSERT INTO customers (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Customer>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Check that a customer exists, locking the row against deletion until
    /// the transaction ends.
    pub async fn exists_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM customers WHERE id = $1 FOR KEY SHARE")
                .bind(id)
                .fetch_optional(&mut **tx)
                .await?;
        Ok(row.is_some())
    }
}

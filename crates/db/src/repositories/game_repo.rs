//! Repository for the `games` table.

use ludo_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::game::{CreateGame, Game};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, stock_total, price_per_day, created_at, updated_at";

/// Provides lookups for games.
pub struct GameRepo;

impl GameRepo {
    /// Insert a new game, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateGame) -> Result<Game, sqlx::Error> {
        let query = format!(
            "INSERT INTO games (name, stock_total, price_per_day) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(&input.name)
            .bind(input.stock_total)
            .bind(input.price_per_day)
            .fetch_one(pool)
            .await
    }

    /// Fetch a game and hold a row lock on it for the rest of the transaction.
    ///
    /// Concurrent rental creations for the same game queue up behind this
    /// lock, so the open-rental count they read is never stale.
    pub async fn lock_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }
}

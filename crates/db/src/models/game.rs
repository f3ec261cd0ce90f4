//! Game entity model.

use ludo_core::types::{Cents, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `games` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: DbId,
    pub name: String,
    /// Units owned. Caps the number of simultaneously open rentals.
    pub stock_total: i32,
    pub price_per_day: Cents,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a game to the catalogue.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGame {
    pub name: String,
    pub stock_total: i32,
    pub price_per_day: Cents,
}

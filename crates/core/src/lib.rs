//! Domain types and rules for board-game rentals.
//!
//! Everything in this crate is pure: no database, no HTTP. The `db` and `api`
//! crates call into these functions to validate input and compute prices.

pub mod clock;
pub mod dates;
pub mod error;
pub mod rental;
pub mod types;

//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&PgPool` as the first argument. Methods ending in `_in_tx` run inside a
//! caller-owned transaction so a read-then-write sequence stays atomic.

pub mod customer_repo;
pub mod game_repo;
pub mod rental_repo;

pub use customer_repo::CustomerRepo;
pub use game_repo::GameRepo;
pub use rental_repo::RentalRepo;

//! Row models and insert DTOs, one module per table.

pub mod customer;
pub mod game;
pub mod rental;

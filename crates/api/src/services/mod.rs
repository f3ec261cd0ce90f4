//! Services that coordinate repositories and domain rules.

pub mod rental;

pub use rental::RentalService;

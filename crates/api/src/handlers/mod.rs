pub mod rental;

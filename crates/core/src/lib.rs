//! Domain types, errors and validation rules for the gift box service.
//!
//! Pure logic only: nothing in this crate touches the database or HTTP.

pub mod error;
pub mod gift_box;
pub mod types;

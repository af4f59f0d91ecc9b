//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod gift_box_repo;

pub use gift_box_repo::GiftBoxRepo;

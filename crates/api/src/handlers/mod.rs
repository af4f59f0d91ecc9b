//! Request handlers.
//!
//! Each submodule provides async handler functions for a single entity type.
//! Handlers delegate to the corresponding repository in `giftbox_db` and map
//! errors via [`AppError`](crate::error::AppError).

pub mod gift_box;

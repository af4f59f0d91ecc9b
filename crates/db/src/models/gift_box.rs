//! Gift box entity model and DTOs.

use giftbox_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A gift box row from the `kids_gift_boxes` table.
///
/// `price` is stored as `NUMERIC(10,2)` and read back as `FLOAT8`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct GiftBox {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub contains: Option<String>,
    pub notes: Option<String>,
    pub images: Vec<String>,
    pub price: f64,
}

/// DTO for creating a new gift box. An `id` in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGiftBox {
    pub title: String,
    pub description: String,
    pub contains: Option<String>,
    pub notes: Option<String>,
    /// Stored as an empty array when omitted or null.
    pub images: Option<Vec<String>>,
    pub price: f64,
}

//! Gift box constants, identifier parsing and input validation.
//!
//! Pure functions shared by the API layer. Each validator returns
//! [`CoreError::Validation`] with a message suitable for a 400 response.

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Entity name used in not-found errors and log fields.
pub const ENTITY_NAME: &str = "GiftBox";

/// Maximum length of a gift box title, in characters.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum number of images attached to one gift box.
pub const MAX_IMAGES: usize = 12;

/// Largest price the `NUMERIC(10,2)` column can hold (inclusive).
///
/// Postgres rounds to cents before its range check, so any fractional cent
/// above this bound rounds up to 10^8 and overflows.
pub const MAX_PRICE: f64 = 99_999_999.99;

// ---------------------------------------------------------------------------
// Identifier parsing
// ---------------------------------------------------------------------------

/// Parse a path-carried gift box identifier.
///
/// Accepts base-10 integers greater than zero. Anything else (empty,
/// non-numeric, overflowing, zero or negative) is a validation error rather
/// than a not-found, so callers can answer 400 without touching storage.
pub fn parse_gift_box_id(raw: &str) -> Result<DbId, CoreError> {
    let id: DbId = raw
        .parse()
        .map_err(|_| CoreError::Validation(format!("Invalid gift box id '{raw}'")))?;

    if id <= 0 {
        return Err(CoreError::Validation(format!(
            "Gift box id must be a positive integer, got {id}"
        )));
    }

    Ok(id)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Reject text Postgres cannot store in a `TEXT` column.
///
/// `field` names the offending input in the error message.
pub fn validate_storable_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.contains('\0') {
        return Err(CoreError::Validation(format!(
            "{field} must not contain NUL characters"
        )));
    }
    Ok(())
}

/// Validate a gift box title.
///
/// Rules:
/// - Must not be empty or whitespace only.
/// - Must not exceed `MAX_TITLE_LEN` characters.
/// - Must not contain NUL characters.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    validate_storable_text("title", title)?;
    if title.trim().is_empty() {
        return Err(CoreError::Validation("title must not be empty".into()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "title must not exceed {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a gift box description. Must not be empty, whitespace only or
/// contain NUL characters.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    validate_storable_text("description", description)?;
    if description.trim().is_empty() {
        return Err(CoreError::Validation(
            "description must not be empty".into(),
        ));
    }
    Ok(())
}

/// Validate a price: finite, non-negative and at most [`MAX_PRICE`].
pub fn validate_price(price: f64) -> Result<(), CoreError> {
    if !price.is_finite() {
        return Err(CoreError::Validation("price must be a finite number".into()));
    }
    if price < 0.0 {
        return Err(CoreError::Validation(format!(
            "price must not be negative, got {price}"
        )));
    }
    if price > MAX_PRICE {
        return Err(CoreError::Validation(format!(
            "price must not exceed {MAX_PRICE}"
        )));
    }
    Ok(())
}

/// Validate the image list.
///
/// Rules:
/// - At most `MAX_IMAGES` entries.
/// - No entry may be empty, whitespace only or contain NUL characters.
pub fn validate_images(images: &[String]) -> Result<(), CoreError> {
    if images.len() > MAX_IMAGES {
        return Err(CoreError::Validation(format!(
            "a gift box may have at most {MAX_IMAGES} images, got {}",
            images.len()
        )));
    }
    for (pos, img) in images.iter().enumerate() {
        if img.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "images[{pos}] must not be empty"
            )));
        }
        validate_storable_text(&format!("images[{pos}]"), img)?;
    }
    Ok(())
}

//! Handlers for the gift box catalogue.
//!
//! Three operations: list all, fetch by id, create. Identifier parsing and
//! payload validation happen here, before any storage access.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use giftbox_core::error::CoreError;
use giftbox_core::gift_box;
use giftbox_db::models::gift_box::CreateGiftBox;
use giftbox_db::repositories::GiftBoxRepo;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::state::AppState;

/// Run every field-level rule against a create payload.
fn validate_create_input(input: &CreateGiftBox) -> AppResult<()> {
    gift_box::validate_title(&input.title)?;
    gift_box::validate_description(&input.description)?;
    gift_box::validate_price(input.price)?;
    if let Some(ref contains) = input.contains {
        gift_box::validate_storable_text("contains", contains)?;
    }
    if let Some(ref notes) = input.notes {
        gift_box::validate_storable_text("notes", notes)?;
    }
    if let Some(ref images) = input.images {
        gift_box::validate_images(images)?;
    }
    Ok(())
}

/// GET /giftboxes
///
/// List every gift box. An empty catalogue is `[]`.
pub async fn list_gift_boxes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let boxes = GiftBoxRepo::list(&state.pool).await?;

    tracing::debug!(count = boxes.len(), "Listed gift boxes");

    Ok(Json(boxes))
}

/// GET /giftboxes/{id}
///
/// Retrieve a single gift box. A non-numeric id is a 400, an unknown id a 404.
pub async fn get_gift_box(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = gift_box::parse_gift_box_id(&raw_id)?;

    let found = GiftBoxRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: gift_box::ENTITY_NAME,
            id,
        }))?;

    Ok(Json(found))
}

/// POST /giftboxes
///
/// Create a gift box. Any `id` in the body is ignored; the stored row,
/// including its generated id, is returned with 201.
pub async fn create_gift_box(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateGiftBox>,
) -> AppResult<impl IntoResponse> {
    validate_create_input(&input)?;

    let created = GiftBoxRepo::create(&state.pool, &input).await?;

    tracing::info!(
        gift_box_id = created.id,
        title = %created.title,
        "Gift box created",
    );

    Ok((StatusCode::CREATED, Json(created)))
}

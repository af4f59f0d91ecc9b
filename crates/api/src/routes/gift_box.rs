//! Route definitions for gift boxes.

use axum::routing::get;
use axum::Router;

use crate::handlers::gift_box;
use crate::state::AppState;

/// Gift box routes mounted at `/giftboxes`.
///
/// ```text
/// GET    /              -> list_gift_boxes
/// POST   /              -> create_gift_box
/// GET    /{id}          -> get_gift_box
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(gift_box::list_gift_boxes).post(gift_box::create_gift_box),
        )
        .route("/{id}", get(gift_box::get_gift_box))
}

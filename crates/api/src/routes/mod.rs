pub mod gift_box;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (everything except `/health`).
///
/// Route hierarchy:
///
/// ```text
/// /giftboxes                                       list, create
/// /giftboxes/{id}                                  get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/giftboxes", gift_box::router())
}

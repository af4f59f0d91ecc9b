//! Request extractors that reject with [`AppError`] instead of axum's
//! plain-text rejections.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor.
///
/// Behaves like [`axum::Json`] but turns every rejection (bad syntax, wrong
/// types, missing fields, missing `Content-Type`) into a 400
/// [`AppError::BadRequest`] carrying the parser's reason.
///
/// ```ignore
/// async fn create(JsonBody(input): JsonBody<CreateGiftBox>) -> AppResult<impl IntoResponse> {
///     // input is fully deserialized here
/// }
/// ```
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!("Invalid JSON: {}", rejection.body_text()))
    }
}

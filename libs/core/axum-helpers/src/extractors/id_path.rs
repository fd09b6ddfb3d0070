//! Integer id path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use std::num::IntErrorKind;

/// Extractor for a single integer `{id}` path parameter.
///
/// Non-numeric ids are rejected with a 400 JSON `ErrorResponse` instead of
/// axum's plain-text path rejection. Integers past the `i64` range saturate,
/// so they still reach the handler as ids that match no row.
///
/// ```ignore
/// async fn get_item(IdPath(id): IdPath) -> String {
///     format!("Item ID: {}", id)
/// }
///
/// let app = Router::new().route("/items/{id}", get(get_item));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()).into_response())?;

        match raw.trim().parse::<i64>() {
            Ok(id) => Ok(IdPath(id)),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Ok(IdPath(i64::MAX)),
                IntErrorKind::NegOverflow => Ok(IdPath(i64::MIN)),
                _ => Err(AppError::InvalidId(raw).into_response()),
            },
        }
    }
}

//! UUID path parameter extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

/// Extractor for a route with exactly one UUID path parameter.
///
/// An unparsable value rejects with 400, naming the parameter in `errors`.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::get};
/// use axum_helpers::UuidPath;
///
/// async fn get_store(UuidPath(id): UuidPath) -> String {
///     id.to_string()
/// }
///
/// let app: Router = Router::new().route("/stores/{id}", get(get_store));
/// ```
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let (name, raw) = params
            .into_iter()
            .next()
            .ok_or_else(|| AppError::InternalServerError("route has no path parameter".into()))?;

        Uuid::parse_str(&raw)
            .map(UuidPath)
            .map_err(|_| AppError::InvalidUuid {
                field: name,
                value: raw,
            })
    }
}

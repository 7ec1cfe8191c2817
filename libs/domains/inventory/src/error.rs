use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Store not found: {0}")]
    StoreNotFound(Uuid),

    #[error("Product not found: {0}")]
    ProductNotFound(Uuid),

    #[error("Product with SKU '{0}' already exists")]
    DuplicateSku(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type InventoryResult<T> = Result<T, InventoryError>;

impl InventoryError {
    /// Map a database error raised while writing a product.
    ///
    /// Constraint violations mean another request won the race past the
    /// service pre-checks, so they become the same errors those checks raise.
    pub fn from_product_write(err: DbErr, sku: &str, store_id: Uuid) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::DuplicateSku(sku.to_string()),
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => Self::StoreNotFound(store_id),
            _ => Self::from(err),
        }
    }
}

impl From<DbErr> for InventoryError {
    fn from(err: DbErr) -> Self {
        InventoryError::Internal(format!("Database error: {}", err))
    }
}

/// Convert InventoryError to AppError for standardized error responses
impl From<InventoryError> for AppError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::StoreNotFound(_) => AppError::NotFound("Store not found".to_string()),
            InventoryError::ProductNotFound(_) => {
                AppError::NotFound("Product not found".to_string())
            }
            InventoryError::DuplicateSku(_) => {
                AppError::BadRequest("Product with this SKU already exists".to_string())
            }
            InventoryError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = InventoryError::StoreNotFound(Uuid::now_v7()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = InventoryError::ProductNotFound(Uuid::now_v7()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_duplicate_sku_is_bad_request() {
        let response = InventoryError::DuplicateSku("abc-1".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_db_error_is_internal() {
        let err: InventoryError = DbErr::Custom("boom".to_string()).into();
        assert!(matches!(err, InventoryError::Internal(_)));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unclassified_write_error_is_internal() {
        let err = InventoryError::from_product_write(
            DbErr::Custom("boom".to_string()),
            "abc-1",
            Uuid::now_v7(),
        );
        assert!(matches!(err, InventoryError::Internal(_)));
    }
}

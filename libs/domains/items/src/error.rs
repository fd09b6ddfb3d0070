use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Item {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type ItemResult<T> = Result<T, ItemError>;

impl ItemError {
    /// Metric label for this failure.
    pub fn outcome(&self) -> &'static str {
        match self {
            ItemError::Validation(_) => "invalid",
            ItemError::NotFound(_) => "not_found",
            ItemError::Database(_) => "error",
        }
    }
}

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::Validation(errors) => AppError::ValidationError(errors),
            ItemError::NotFound(id) => AppError::NotFound(format!("Item {} not found", id)),
            ItemError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_codes() {
        let not_found = ItemError::NotFound(3).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let invalid = ItemError::Validation(ValidationErrors::new()).into_response();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let db = ItemError::Database(DbErr::Custom("boom".to_string())).into_response();
        assert_eq!(db.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_message_names_the_id() {
        assert_eq!(ItemError::NotFound(42).to_string(), "Item 42 not found");
        match AppError::from(ItemError::NotFound(42)) {
            AppError::NotFound(msg) => assert_eq!(msg, "Item 42 not found"),
            other => panic!("unexpected {:?}", other),
        }
    }
}

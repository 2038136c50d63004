use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_helpers::field_errors;
use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        match self {
            // Not-found replies carry no body
            ProductError::NotFound(id) => {
                tracing::info!(product_id = %id, "Product not found");
                StatusCode::NOT_FOUND.into_response()
            }
            ProductError::Validation(errors) => {
                tracing::info!("Validation failed: {}", errors);
                (StatusCode::BAD_REQUEST, Json(field_errors(&errors))).into_response()
            }
        }
    }
}

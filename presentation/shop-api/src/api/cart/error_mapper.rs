use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CartError::MissingProductId => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Product id is required.",
            ),
            CartError::ProductNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "Product not found.")
            }
            CartError::NotInCart => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "Product not found in cart.",
            ),
            CartError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "Internal server error.",
            ),
        };

        (status, ErrorResponse::json(name, message))
    }
}

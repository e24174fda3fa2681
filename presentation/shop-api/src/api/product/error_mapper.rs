use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::MissingFields => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Name and price are required.",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "Product not found."),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "Internal server error.",
            ),
        };

        (status, ErrorResponse::json(name, message))
    }
}

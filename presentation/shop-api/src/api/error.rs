use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body: the error kind plus a human readable message.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn json(name: &str, message: &str) -> Json<Self> {
        Json(Self {
            name: name.to_string(),
            message: message.to_string(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Response for a path id that is not a non-negative integer.
pub fn invalid_product_id() -> Json<ErrorResponse> {
    ErrorResponse::json("ValidationError", "Invalid product id.")
}

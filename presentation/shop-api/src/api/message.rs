use poem_openapi::{Object, payload::Json};

/// Plain confirmation body returned by mutating endpoints.
#[derive(Object, Debug, Clone)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn json(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

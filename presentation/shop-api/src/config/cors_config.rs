use poem::middleware::Cors;
use std::env;

const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Cross-origin settings: exactly one origin may call the API.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origin: String,
}

impl CorsConfig {
    /// Environment variables:
    /// - CORS_ALLOWED_ORIGIN: the single allowed origin
    ///   (default: "http://localhost:5173")
    pub fn from_env() -> Self {
        let allowed_origin = env::var("CORS_ALLOWED_ORIGIN")
            .ok()
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string());

        Self { allowed_origin }
    }

    /// Builds the CORS middleware
    ///
    /// - Methods: GET, POST, PUT, DELETE, OPTIONS
    /// - Headers: content-type
    pub fn middleware(&self) -> Cors {
        Cors::new()
            .allow_origins(vec![self.allowed_origin.as_str()])
            .allow_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allow_headers(vec!["content-type"])
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}

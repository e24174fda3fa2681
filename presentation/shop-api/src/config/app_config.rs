use super::{catalog_config::CatalogConfig, cors_config::CorsConfig, server_config::ServerConfig};

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: CorsConfig::from_env(),
            catalog: CatalogConfig::from_env(),
        }
    }
}

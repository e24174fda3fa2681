use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener,
    middleware::{Cors, Tracing},
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    /// Assembles the API under `/api`, plus Swagger UI at `/docs` and the
    /// OpenAPI document at `/openapi.json`.
    pub fn build_app(
        cors: Cors,
        container: DependencyContainer,
        public_url: String,
    ) -> impl Endpoint {
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.product_api,
                container.cart_api,
            ),
            "Shop API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("{}/api", public_url));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        Route::new()
            .nest("/api", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(cors)
            .with(Tracing)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let public_url = config.server.public_url();
        let app = Self::build_app(config.cors.middleware(), container, public_url.clone());

        tracing::info!(
            address = %addr,
            allowed_origin = %config.cors.allowed_origin,
            "Server is listening on {}",
            public_url
        );
        tracing::info!("Swagger UI at {}/docs", public_url);
        tracing::info!("OpenAPI JSON at {}/openapi.json", public_url);

        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

use std::time::Duration;

use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

pub struct Server;

impl Server {
    /// Route tree: the API, Swagger UI under `/docs` and the raw document under `/openapi.json`
    pub fn app(container: DependencyContainer, public_url: &str) -> Route {
        let api_service = OpenApiService::new(
            (container.health_api, container.product_api),
            "Products REST API",
            env!("CARGO_PKG_VERSION"),
        )
        .description("API Docs for Products")
        .server(public_url.to_string());
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
    }

    /// Serves until Ctrl-C, then drains in-flight requests
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::app(container, &config.server.public_url())
            .with(config.cors)
            .with(Tracing);

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);

        PoemServer::new(TcpListener::bind(&addr))
            .run_with_graceful_shutdown(
                app,
                async {
                    if let Err(err) = tokio::signal::ctrl_c().await {
                        tracing::error!(error = %err, "Failed to listen for shutdown signal");
                    }
                    tracing::info!("Shutdown signal received");
                },
                Some(SHUTDOWN_GRACE),
            )
            .await?;
        Ok(())
    }
}

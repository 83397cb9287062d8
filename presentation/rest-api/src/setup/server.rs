use anyhow::Context;
use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener,
    middleware::{Cors, Tracing},
};
use poem_openapi::OpenApiService;

use crate::api::error::render_framework_error;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = build_app(container, config.cors, format!("http://{}", addr));

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr))
            .run(app)
            .await
            .with_context(|| format!("failed to serve on {}", addr))?;
        Ok(())
    }
}

/// Assembles the routes, documentation endpoints and middleware.
pub fn build_app(container: DependencyContainer, cors: Cors, server_url: String) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (
            container.health_api,
            container.shopping_list_api,
            container.item_api,
        ),
        "Shopping List API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url);
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/", api_service)
        .nest("/docs", ui)
        .nest("/openapi.json", spec)
        .with(cors)
        .with(Tracing)
        .catch_all_error(render_framework_error)
}

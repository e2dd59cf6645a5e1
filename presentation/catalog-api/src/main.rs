use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod tags;
    pub mod health {
        pub mod routes;
    }
    pub mod catalog {
        pub mod dto;
        pub mod routes;
    }
    pub mod product {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod form {
        pub mod dto;
        pub mod routes;
    }
    pub mod selection {
        pub mod dto;
        pub mod routes;
    }
}
mod config {
    pub mod app_config;
    pub mod cors_config;
    pub mod product_api_config;
    pub mod server_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use business::domain::catalog::use_cases::load::LoadCatalogUseCase;
use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Catalog API Entry Point
///
/// Initializes the application, wires dependencies, loads the catalog once
/// and starts the HTTP server.
///
/// - config/: Application configuration (server, CORS, remote product service)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config)?;

    // 5. Initial catalog load; a failure leaves an empty catalog that can be reloaded
    if let Err(err) = container.load_use_case.execute().await {
        tracing::warn!("Initial catalog load failed: {}", err.user_message());
    }

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}

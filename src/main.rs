use std::env;
mod api;
mod app;
mod auth;
mod config;
mod db;
mod error;
mod handlers;

use app::{build_router, build_service};
use config::{Config, Environment};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn setup_logging(environment: Environment) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Si RUST_LOG n'est pas défini, utiliser ces règles par défaut
        tracing_subscriber::EnvFilter::new("info,account_service=debug,tower_http=info")
    });

    // CloudWatch indexe mieux le JSON
    let json = environment.is_production()
        || env::var("LOG_FORMAT").is_ok_and(|format| format == "json");

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(false))
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

// ----------------- Main -----------------

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    let environment = Environment::detect();
    if !environment.is_production() {
        // Optionnel en développement
        dotenvy::dotenv().ok();
    }

    setup_logging(environment);
    tracing::info!("Starting account-service...");

    let config = Config::from_env();
    let app = build_router(build_service(&config), config.frontend_url.as_deref());

    if env::var("AWS_LAMBDA_FUNCTION_NAME").is_ok() {
        tracing::info!("Running in Lambda mode");
        lambda_http::run(app).await
    } else {
        tracing::info!("Running in local HTTP server mode");
        let addr = format!(
            "{host}:{port}",
            host = config.server_host,
            port = config.server_port
        );
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("Server running at http://{addr}");
        axum::serve(listener, app).await?;

        Ok(())
    }
}

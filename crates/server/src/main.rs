//! Catalog service binary: loads configuration, connects the store, wires
//! the services together and serves the HTTP API until shutdown.

mod migrations;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use catalog::ProductService;
use catalog_api::{router::router, AppState};
use catalog_auth::{AuthService, Hasher};
use catalog_core::AppConfig;
use catalog_store::ConnectOptions;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "startup failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    let pool = catalog_store::connect(&ConnectOptions {
        url: config.db_url.clone(),
        user: config.db_user.clone(),
        password: config.db_password.clone(),
    })
    .await?;

    migrations::run(&pool).await?;

    let hasher = Hasher::new(config.bcrypt_cost)?;
    let auth = AuthService::new(
        pool.clone(),
        hasher,
        config.jwt_secret.clone(),
        config.jwt_ttl_seconds,
    )?;
    let products = ProductService::new(pool);

    let state = Arc::new(AppState::new(auth, products));
    let app = router(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.http_port)).await?;
    tracing::info!(port = config.http_port, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use querylog_api::config::ServerConfig;
use querylog_api::rate_limiter::FixedWindowLimiter;
use querylog_api::router::build_app_router;
use querylog_api::server;
use querylog_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "querylog_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = querylog_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    querylog_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    querylog_db::ensure_schema(&pool)
        .await
        .expect("Failed to ensure database schema");
    tracing::info!("Database schema ensured");

    // --- App state ---
    let rate_limiter = Arc::new(FixedWindowLimiter::new(config.rate_limit.clone()));
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        rate_limiter,
    };

    // --- Router ---
    let app = build_app_router(state);

    // --- Start server ---
    let (listener, addr) = match server::bind_with_retry(&config.host, config.port).await {
        Ok(bound) => bound,
        Err(e) => {
            tracing::error!(error = %e, "Failed to bind a listen port");
            std::process::exit(1);
        }
    };
    tracing::info!(%addr, "Starting server");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(server::shutdown_signal())
    .await
    .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

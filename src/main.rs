//! Library API server
//!
//! REST CRUD service for a library's authors, books, members, physical
//! copies and loans.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_api::{api, config::AppConfig, db, repository::Repository, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_api={},tower_http=info", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Library API v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let file_backed = db::is_file_backed(&config.database.url);
    let pool = db::connect(&config.database)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Ensure all declared tables exist before serving traffic
    db::create_all(&pool, file_backed)
        .await
        .expect("Failed to create database tables");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        repository: Repository::new(pool),
    };

    // Build router
    let app = api::create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

use std::net::SocketAddr;

use surrealdb::engine::any::{self};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use roomboard_server::config::ServerConfig;
use roomboard_server::router::create_router;
use roomboard_server::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;

    // Initialize SurrealDB connection
    let db = any::connect(&config.database_url)
        .await
        .map_err(|e| format!("Failed to connect to SurrealDB at '{}': {}", config.database_url, e))?;

    // Configure database
    db.use_ns(&config.database_namespace)
        .use_db(&config.database_name)
        .await
        .map_err(|e| {
            format!(
                "Failed to select {}.{} namespace/database: {}",
                config.database_namespace, config.database_name, e
            )
        })?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    // Create application state and build the routes over it
    let app_state = AppState::new(db, config);
    let app = create_router(app_state);

    tracing::info!("Room rental backend listening on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind to address {}: {}", addr, e))?;
    axum::serve(listener, app)
        .await
        .map_err(|e| format!("Failed to start axum server: {}", e))?;

    Ok(())
}

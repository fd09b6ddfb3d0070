use axum_helpers::server::create_production_app;
use core_config::load_dotenv;
use core_config::tracing::{init_tracing, install_color_eyre};
use database::sql::{connect_from_config_with_retry, run_migrations};
use migration::Migrator;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();
    load_dotenv();

    let config = Config::from_env()?;
    init_tracing(&config.environment);
    observability::init_metrics();

    info!("Connecting to database at {}", config.database.url());
    let db = connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("Database connection failed: {}", e))?;

    // Creates the items table on first start, no-op afterwards
    run_migrations::<Migrator>(&db, config.app.name).await?;

    let state = AppState { config, db };
    let app = api::app(&state)?;
    let AppState { config, db } = state;

    info!(
        "Starting {} v{} with graceful shutdown (30s timeout)",
        config.app.name, config.app.version
    );

    create_production_app(
        app,
        &config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing database connections");
            match db.close().await {
                Ok(_) => info!("Database connection closed successfully"),
                Err(e) => tracing::error!("Error closing database: {}", e),
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Items API shutdown complete");
    Ok(())
}

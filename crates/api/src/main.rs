use anyhow::{Context, Result};
use osteo_sync_api::{app, config::Config, middleware};
use persistence::Storage;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::load()?;

    middleware::logging::init_logging(&config.logging)?;
    middleware::init_metrics()?;

    info!("Starting Osteo Sync API v{}", env!("CARGO_PKG_VERSION"));

    let pool = if config.database.is_configured() {
        let pool = persistence::db::create_pool(&config.database.pool_config())
            .await
            .context("connecting to the configured database")?;

        if config.database.run_migrations {
            info!("Running database migrations...");
            persistence::db::run_migrations(&pool).await?;
            info!("Migrations completed");
        }
        Some(pool)
    } else {
        warn!("No database configured, readings are kept in memory and lost on restart");
        None
    };

    let storage = Storage::from_pool(pool, &config.fallback.devices);
    info!(storage = %storage.mode(), "Storage ready");

    let addr = config.socket_addr()?;
    let app = app::create_app(config, storage);

    info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

use tasca_config::{Config, StoreBackend};
use tasca_db::{InMemoryTaskStore, SqliteTaskStore, TaskStore};
use tasca_server::{AppState, ServerResult, build_router, logger};

use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerResult<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path: Option<PathBuf> = if let Some(ref filename) = config.logging.file {
        let log_dir = config.log_dir()?;
        std::fs::create_dir_all(&log_dir)?;
        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting tasca-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let store = build_store(&config).await?;
    let app = build_router(AppState::new(store), &config.api.mount_path);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Actual address matters when port is 0 (auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!(
        "Server listening on {} (tasks at {})",
        actual_addr, config.api.mount_path
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn build_store(config: &Config) -> ServerResult<Arc<dyn TaskStore>> {
    match config.database.backend {
        StoreBackend::Sqlite => {
            let database_path = config.database_path()?;
            if let Some(parent) = database_path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            info!("Opening database: {}", database_path.display());
            let store =
                SqliteTaskStore::open(&database_path, config.database.max_connections).await?;
            info!("Database ready, migrations applied");

            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            warn!("Using in-memory task store - data is lost on shutdown");
            Ok(Arc::new(InMemoryTaskStore::new()))
        }
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Keep serving without a shutdown trigger
            std::future::pending::<()>().await;
        }
    }
}

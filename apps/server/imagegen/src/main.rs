use imagegen::config::ImagegenConfig;
use imagegen::error::ImagegenError;
use imagegen::logger::initialize as logger_initialize;
use imagegen::routes::build_router;
use imagegen::state::AppState;

use client_core::gpu::GpuClient;

use common::ErrorLocation;

use std::env;
use std::fs::create_dir_all;
use std::panic::Location;
use std::path::{Path, PathBuf};

use log::info;
use tokio::net::TcpListener;

const CONFIG_DIR_ENV: &str = "IMAGEGEN_CONFIG_DIR";
const LOG_DIR_ENV: &str = "IMAGEGEN_LOG_DIR";
const DEFAULT_LOG_DIR: &str = "logs";

#[tokio::main]
async fn main() -> Result<(), ImagegenError> {
    dotenvy::dotenv().ok();

    // Ensure log directory exists
    let log_dir =
        PathBuf::from(env::var(LOG_DIR_ENV).unwrap_or_else(|_| String::from(DEFAULT_LOG_DIR)));
    create_dir_all(&log_dir).map_err(|e| ImagegenError::Imagegen {
        message: format!("Failed to create log directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    // Initialize logger FIRST
    logger_initialize(&log_dir)?;

    info!("imagegen server starting");
    info!("Log directory: {}", log_dir.display());

    let config_dir = env::var(CONFIG_DIR_ENV).unwrap_or_else(|_| String::from("."));
    let mut config = ImagegenConfig::load(Path::new(&config_dir))?;
    config.apply_env_overrides();
    config.validate()?;

    info!("Static dir: {}", config.server.static_dir);
    info!("GPU endpoint: {}", config.gpu.endpoint);

    let gpu = GpuClient::new(&config.gpu.endpoint).map_err(|e| ImagegenError::Imagegen {
        message: format!("Failed to construct GPU client: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let listen_addr = config.server.listen_addr.clone();
    let router = build_router(AppState::new(config, gpu));

    let listener = TcpListener::bind(&listen_addr)
        .await
        .map_err(|e| ImagegenError::Imagegen {
            message: format!("Failed to bind {listen_addr}: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    info!("Listening on {listen_addr}");

    axum::serve(listener, router)
        .await
        .map_err(|e| ImagegenError::Imagegen {
            message: format!("Server error: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(())
}

use crate::error::config::ConfigError;

use client_core::gpu::DEFAULT_GPU_ENDPOINT;
use client_core::{API_SERVER_HOSTNAME, API_SERVER_PORT};

use common::ErrorLocation;

use std::env;
use std::net::SocketAddr;
use std::panic::Location;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "imagegen.toml";

/// Listen address override, e.g. `127.0.0.1:9000`.
pub const LISTEN_ADDR_ENV: &str = "IMAGEGEN_LISTEN_ADDR";
/// GPU worker endpoint override.
pub const GPU_ENDPOINT_ENV: &str = "IMAGEGEN_GPU_ENDPOINT";
/// Frontend bundle directory override.
pub const STATIC_DIR_ENV: &str = "IMAGEGEN_STATIC_DIR";

// The default bind matches the fixed endpoint the hello fetch operation
// points at.
const DEFAULT_LISTEN_ADDR: &str =
    const_format::concatcp!(API_SERVER_HOSTNAME, ":", API_SERVER_PORT);

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            static_dir: default_static_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpuSection {
    #[serde(default = "default_gpu_endpoint")]
    pub endpoint: String,
}

impl Default for GpuSection {
    fn default() -> Self {
        Self {
            endpoint: default_gpu_endpoint(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsSection {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsSection {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImagegenConfig {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub gpu: GpuSection,

    #[serde(default)]
    pub cors: CorsSection,
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_listen_addr() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}
fn default_static_dir() -> String {
    "public".to_string()
}
fn default_gpu_endpoint() -> String {
    DEFAULT_GPU_ENDPOINT.to_string()
}
fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

// ============================================
// IMPLEMENTATION
// ============================================

impl ImagegenConfig {
    /// Load config from `{config_dir}/imagegen.toml`.
    ///
    /// Tries `{config_dir}/imagegen.toml`, then
    /// `{config_dir}/config/imagegen.toml`. A missing file falls back to
    /// defaults; a file that exists but cannot be read or parsed is an
    /// error.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let paths = [
            config_dir.join(CONFIG_FILE_NAME),
            config_dir.join("config").join(CONFIG_FILE_NAME),
        ];

        for path in &paths {
            if path.exists() {
                let config = Self::load_from_path(path)?;
                info!("Config loaded from {}", path.display());
                return Ok(config);
            }
        }

        info!("No {CONFIG_FILE_NAME} found, using defaults");
        Ok(Self::default())
    }

    fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: ImagegenConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        Ok(config)
    }

    /// Apply environment variable overrides on top of the loaded file.
    ///
    /// Empty values are ignored so `IMAGEGEN_GPU_ENDPOINT=` in an `.env`
    /// file does not wipe the configured endpoint.
    pub fn apply_env_overrides(&mut self) {
        if let Some(addr) = non_empty_env(LISTEN_ADDR_ENV) {
            info!("{LISTEN_ADDR_ENV} overrides listen address: {addr}");
            self.server.listen_addr = addr;
        }

        if let Some(endpoint) = non_empty_env(GPU_ENDPOINT_ENV) {
            info!("{GPU_ENDPOINT_ENV} overrides GPU endpoint: {endpoint}");
            self.gpu.endpoint = endpoint;
        }

        if let Some(dir) = non_empty_env(STATIC_DIR_ENV) {
            info!("{STATIC_DIR_ENV} overrides static dir: {dir}");
            self.server.static_dir = dir;
        }
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.listen_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid listen address: {} (expected host:port)",
                    self.server.listen_addr
                ),
            });
        }

        if self.server.static_dir.is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "Static dir cannot be empty".to_string(),
            });
        }

        if !self.gpu.endpoint.starts_with("http://") && !self.gpu.endpoint.starts_with("https://")
        {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid GPU endpoint format: {}", self.gpu.endpoint),
            });
        }

        if self.cors.allowed_origins.is_empty() {
            warn!("CORS origin list is empty, cross-origin requests will be refused");
        }

        for origin in &self.cors.allowed_origins {
            if origin != "*"
                && !origin.starts_with("http://")
                && !origin.starts_with("https://")
            {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: format!("Invalid CORS origin format: {origin}"),
                });
            }
        }

        Ok(())
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

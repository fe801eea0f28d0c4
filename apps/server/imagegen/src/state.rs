use crate::config::ImagegenConfig;

use client_core::gpu::GpuClient;

use std::sync::Arc;

/// Shared per-request context.
///
/// Nothing here mutates after startup, so a clone per handler is all the
/// coordination this server needs.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ImagegenConfig>,
    pub gpu: GpuClient,
}

impl AppState {
    pub fn new(config: ImagegenConfig, gpu: GpuClient) -> Self {
        Self {
            config: Arc::new(config),
            gpu,
        }
    }
}

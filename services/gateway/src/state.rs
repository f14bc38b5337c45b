use crate::catalog::Catalog;
use crate::config::GatewayConfig;
use std::sync::Arc;

/// Shared, read-only application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(config: GatewayConfig, catalog: Catalog) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
        }
    }
}

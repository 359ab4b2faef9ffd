//! Application state shared across handlers

use std::{fmt, sync::Arc};

use application::TransportService;
use infrastructure::{AppConfig, MockTransitAdapter};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Transport data operations
    pub transport_service: Arc<TransportService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("transport_service", &self.transport_service)
            .field("server", &self.config.server.bind_address())
            .finish()
    }
}

impl AppState {
    /// Wire the fixture-backed adapter from configuration
    #[must_use]
    pub fn from_config(config: AppConfig) -> Self {
        let adapter = MockTransitAdapter::from_config(&config.mock_transit);
        Self {
            transport_service: Arc::new(TransportService::new(Arc::new(adapter))),
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_keeps_config() {
        let state = AppState::from_config(AppConfig::for_testing());
        assert!(state.config.mock_transit.is_instant());
        assert!(format!("{state:?}").contains("127.0.0.1:8000"));
    }
}

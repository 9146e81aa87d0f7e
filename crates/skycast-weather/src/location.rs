//! Device position sources.

use std::sync::Arc;

use async_trait::async_trait;
use skycast_core::LocationConfig;

use crate::types::{Coordinates, LocationError};

/// One-shot request for the device's current position.
#[async_trait]
pub trait DeviceLocator: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// No location capability on this platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedLocator;

#[async_trait]
impl DeviceLocator for UnsupportedLocator {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Err(LocationError::ServiceUnavailable)
    }
}

/// Position pinned in configuration.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocator(pub Coordinates);

#[async_trait]
impl DeviceLocator for FixedLocator {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Ok(self.0)
    }
}

/// Pick the locator the configuration allows.
pub fn locator_from_config(config: &LocationConfig) -> Arc<dyn DeviceLocator> {
    match config.fixed_position() {
        Some((latitude, longitude)) => {
            tracing::debug!("Using configured position {}, {}", latitude, longitude);
            Arc::new(FixedLocator(Coordinates::new(latitude, longitude)))
        }
        None => Arc::new(UnsupportedLocator),
    }
}

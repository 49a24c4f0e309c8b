use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{info, warn};

mod config;
pub use config::*;

use crate::shared::Coordinate;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Location unavailable: {0}")]
    Unavailable(String),
    #[error("Location permission denied")]
    Denied,
    #[error("Positioning is not supported on this platform")]
    Unsupported,
    #[error("Location request timed out after {0:?}")]
    TimedOut(Duration),
}

/// A platform capability that can report where the user is.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn acquire(&self) -> Result<Coordinate, Error>;
}

/// Always reports the same coordinate.
#[derive(Debug, Clone, Copy)]
pub struct FixedProvider(pub Coordinate);

#[async_trait]
impl LocationProvider for FixedProvider {
    async fn acquire(&self) -> Result<Coordinate, Error> {
        Ok(self.0)
    }
}

/// A platform without any positioning capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedProvider;

#[async_trait]
impl LocationProvider for UnsupportedProvider {
    async fn acquire(&self) -> Result<Coordinate, Error> {
        Err(Error::Unsupported)
    }
}

/// The point distances are measured from, and whether it came from the
/// provider (`live`) or from the configured fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    pub coordinate: Coordinate,
    pub live: bool,
    pub acquired_at: DateTime<Utc>,
}

impl ReferencePoint {
    pub fn live(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            live: true,
            acquired_at: Utc::now(),
        }
    }

    pub fn fallback(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            live: false,
            acquired_at: Utc::now(),
        }
    }
}

pub struct Locator {
    provider: Box<dyn LocationProvider>,
    config: Config,
}

impl Default for Locator {
    fn default() -> Self {
        Self::new(UnsupportedProvider)
    }
}

impl Locator {
    pub fn new<P: LocationProvider + 'static>(provider: P) -> Self {
        Self {
            provider: Box::new(provider),
            config: Config::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolves the reference point. Never fails: any provider error, or no
    /// answer within the configured timeout, yields the fallback coordinate.
    pub async fn acquire(&self) -> ReferencePoint {
        let result = tokio::time::timeout(self.config.timeout, self.provider.acquire())
            .await
            .unwrap_or(Err(Error::TimedOut(self.config.timeout)));
        match result {
            Ok(coordinate) => {
                info!("Using live location {coordinate}");
                ReferencePoint::live(coordinate)
            }
            Err(err) => {
                warn!("{err}, using default location {}", self.config.fallback);
                ReferencePoint::fallback(self.config.fallback)
            }
        }
    }
}

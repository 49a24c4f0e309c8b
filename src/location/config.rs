use std::time::Duration;

use crate::shared::Coordinate;

/// City center used when no live location can be obtained.
pub const DEFAULT_REFERENCE: Coordinate = Coordinate::new_unchecked(40.7128, -74.0060);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub fallback: Coordinate,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback: DEFAULT_REFERENCE,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

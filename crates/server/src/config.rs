use std::{env, num::ParseIntError, path::PathBuf, time::Duration};

use praedex::{
    location,
    proximity::DEFAULT_MARGIN_PERCENT,
    shared::{Coordinate, geo},
};
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;

#[derive(Error, Debug)]
pub enum Error {
    #[error("PORT is not a valid port: {0}")]
    Port(ParseIntError),
    #[error("PRAEDEX_LOCATE_TIMEOUT_SECS is not a number of seconds: {0}")]
    Timeout(ParseIntError),
    #[error("PRAEDEX_MAP_MARGIN is not a number: {0}")]
    Margin(String),
    #[error("PRAEDEX_FALLBACK must be \"lat,lng\", got {0}")]
    FallbackFormat(String),
    #[error("PRAEDEX_FALLBACK is out of range: {0}")]
    FallbackRange(#[from] geo::Error),
}

pub struct Config {
    pub port: u16,
    /// Csv file to load instead of the built-in seed.
    pub listings_path: Option<PathBuf>,
    /// Endpoint answering with this deployment's coordinate.
    pub geoip_url: Option<String>,
    pub locator: location::Config,
    pub margin_percent: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            listings_path: None,
            geoip_url: None,
            locator: location::Config::default(),
            margin_percent: DEFAULT_MARGIN_PERCENT,
        }
    }
}

impl Config {
    /// Reads the environment. The first command line argument, if any, is
    /// taken as the listings csv path and wins over `PRAEDEX_LISTINGS`.
    pub fn from_env() -> Result<Self, Error> {
        let mut config = Self::default();
        if let Ok(port) = env::var("PORT") {
            config.port = port.trim().parse().map_err(Error::Port)?;
        }
        config.listings_path = env::args()
            .nth(1)
            .or_else(|| env::var("PRAEDEX_LISTINGS").ok())
            .map(PathBuf::from);
        config.geoip_url = env::var("PRAEDEX_GEOIP_URL").ok();
        if let Ok(fallback) = env::var("PRAEDEX_FALLBACK") {
            config.locator.fallback = parse_coordinate(&fallback)?;
        }
        if let Ok(timeout) = env::var("PRAEDEX_LOCATE_TIMEOUT_SECS") {
            let secs = timeout.trim().parse().map_err(Error::Timeout)?;
            config.locator.timeout = Duration::from_secs(secs);
        }
        if let Ok(margin) = env::var("PRAEDEX_MAP_MARGIN") {
            config.margin_percent = margin
                .trim()
                .parse()
                .map_err(|_| Error::Margin(margin.clone()))?;
        }
        Ok(config)
    }
}

fn parse_coordinate(value: &str) -> Result<Coordinate, Error> {
    let Some((latitude, longitude)) = value.split_once(',') else {
        return Err(Error::FallbackFormat(value.to_string()));
    };
    let latitude: f64 = latitude
        .trim()
        .parse()
        .map_err(|_| Error::FallbackFormat(value.to_string()))?;
    let longitude: f64 = longitude
        .trim()
        .parse()
        .map_err(|_| Error::FallbackFormat(value.to_string()))?;
    Ok(Coordinate::new(latitude, longitude)?)
}

mod api;
mod config;
mod dto;
mod geoip;
mod state;

use crate::{config::Config, geoip::GeoIpProvider, state::AppState};
use axum::routing::get;
use praedex::{
    location::{Locator, UnsupportedProvider},
    repository::Repository,
};
use std::{sync::Arc, time::Instant};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

pub fn router(state: Arc<AppState>) -> axum::Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    axum::Router::new()
        .route("/health", get(api::health))
        .route("/categories", get(api::categories))
        .route("/map", get(api::map))
        .route("/listings", get(api::listings).post(api::create_listing))
        .route("/listings/nearest/{limit}", get(api::nearest))
        .route("/listings/{id}", get(api::listing_by_id))
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    info!("Loading listings...");
    let now = Instant::now();
    let repository = match &config.listings_path {
        Some(path) => Repository::new().with_csv(path),
        None => Repository::new().with_seed(),
    };
    let repository = match repository {
        Ok(repository) => repository,
        Err(err) => {
            error!("Failed to load listings: {err}");
            std::process::exit(1);
        }
    };
    info!(
        "Loading {} listings took {:?}",
        repository.len(),
        now.elapsed()
    );

    let locator = match &config.geoip_url {
        Some(url) => Locator::new(GeoIpProvider::new(url.as_str())),
        None => Locator::new(UnsupportedProvider),
    }
    .with_config(config.locator);
    let state = Arc::new(AppState::new(repository, locator, config.margin_percent));

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {}: {err}", config.port);
            std::process::exit(1);
        }
    };
    info!("Listening to port {}", config.port);
    if let Err(err) = axum::serve(listener, router(state)).await {
        error!("Server stopped: {err}");
    }
}

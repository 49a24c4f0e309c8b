use std::{collections::HashMap, sync::Arc};

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use praedex::{
    location::ReferencePoint,
    proximity::{filter_by_category, normalize_to_unit_square},
};

use crate::{
    api::params::{category_from_params, reference_from_params},
    dto::MapDto,
    state::AppState,
};

/// Pin layout for the map panel. Without `refLat`/`refLng` the reference is
/// resolved by the locator, falling back to the configured default.
pub async fn map(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let filter = category_from_params(&params)?;
    let margin_percent: f64 = match params.get("margin") {
        Some(value) => value.parse().map_err(|_| StatusCode::BAD_REQUEST)?,
        None => state.margin_percent,
    };
    let reference = match reference_from_params(&params)? {
        Some(coordinate) => ReferencePoint::live(coordinate),
        None => state.locator.acquire().await,
    };

    let listings = state.store.read().await.list();
    let layout = normalize_to_unit_square(
        filter_by_category(&listings, filter),
        Some(&reference.coordinate),
        margin_percent,
    );
    Ok(Json(MapDto::from(layout, reference)).into_response())
}

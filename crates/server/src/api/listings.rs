use std::{collections::HashMap, sync::Arc};

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use praedex::{
    listing::ListingDraft,
    proximity::{annotate_and_sort, filter_by_category},
    repository,
};
use tracing::{error, warn};

use crate::{
    api::params::{category_from_params, required_reference},
    dto::{AnnotatedListingDto, ListingDto},
    state::AppState,
};

/// All listings accepted by `category`, nearest to `refLat`/`refLng` first.
pub async fn listings(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let result = by_distance(&params, &state).await?;
    Ok(Json(result).into_response())
}

pub async fn nearest(
    Path(limit): Path<usize>,
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let mut result = by_distance(&params, &state).await?;
    result.truncate(limit);
    Ok(Json(result).into_response())
}

async fn by_distance(
    params: &HashMap<String, String>,
    state: &AppState,
) -> Result<Vec<AnnotatedListingDto>, StatusCode> {
    let reference = required_reference(params)?;
    let filter = category_from_params(params)?;
    let listings = state.store.read().await.list();
    Ok(annotate_and_sort(&reference, filter_by_category(listings, filter))
        .into_iter()
        .map(AnnotatedListingDto::from)
        .collect())
}

pub async fn listing_by_id(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let listing = state
        .store
        .read()
        .await
        .listing_by_id(&id)
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(ListingDto::from(listing)).into_response())
}

pub async fn create_listing(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<ListingDraft>,
) -> Result<Response, StatusCode> {
    let listing = state.store.write().await.add(draft).map_err(|err| match &err {
        repository::Error::Listing(_) | repository::Error::Coordinate(_) => {
            warn!("Rejected listing: {err}");
            StatusCode::BAD_REQUEST
        }
        _ => {
            error!("Failed to add listing: {err}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    })?;
    Ok((StatusCode::CREATED, Json(ListingDto::from(listing))).into_response())
}

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use praedex::proximity::category_counts;
use serde::Serialize;

use crate::{dto::CategoryCountsDto, state::AppState};

#[derive(Serialize)]
struct Health {
    status: &'static str,
    listings: usize,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Response {
    let listings = state.store.read().await.list().len();
    Json(Health {
        status: "ok",
        listings,
    })
    .into_response()
}

pub async fn categories(State(state): State<Arc<AppState>>) -> Response {
    let listings = state.store.read().await.list();
    Json(CategoryCountsDto {
        total: listings.len(),
        categories: category_counts(&listings),
    })
    .into_response()
}

//! services/api/src/web/catalog.rs
//!
//! Read-only catalog endpoints: browse with filters, detail lookup, the daily
//! feature and the map markers.

use crate::web::{
    protocol::{DinosaurResponse, FacetsResponse, FilterQuery, MapMarkerResponse},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::Local;
use std::sync::Arc;
use tracing::{info, warn};

/// List dinosaurs matching every given facet selector, in catalog order.
#[utoipa::path(
    get,
    path = "/dinosaurs",
    params(FilterQuery),
    responses(
        (status = 200, description = "Matching dinosaurs (possibly none)", body = Vec<DinosaurResponse>),
        (status = 400, description = "Unknown facet value")
    )
)]
pub async fn list_dinosaurs_handler(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<Vec<DinosaurResponse>>, (StatusCode, String)> {
    let criteria = query.into_criteria().map_err(|e| {
        warn!("Rejected browse filter: {}", e);
        (StatusCode::BAD_REQUEST, e.to_string())
    })?;

    let results: Vec<DinosaurResponse> = criteria
        .apply(app_state.catalog.dinosaurs())
        .into_iter()
        .map(DinosaurResponse::from)
        .collect();
    info!("Browse returned {} dinosaurs.", results.len());
    Ok(Json(results))
}

/// Fetch a single dinosaur by id.
#[utoipa::path(
    get,
    path = "/dinosaurs/{id}",
    params(("id" = String, Path, description = "The dinosaur's id.")),
    responses(
        (status = 200, description = "The dinosaur", body = DinosaurResponse),
        (status = 404, description = "No such dinosaur")
    )
)]
pub async fn get_dinosaur_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DinosaurResponse>, (StatusCode, String)> {
    app_state
        .catalog
        .get(&id)
        .map(|dino| Json(dino.into()))
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("Dinosaur '{}' not found", id)))
}

/// The dinosaur of the day, based on the server's local date.
#[utoipa::path(
    get,
    path = "/featured",
    responses(
        (status = 200, description = "Today's featured dinosaur", body = DinosaurResponse),
        (status = 404, description = "The catalog is empty")
    )
)]
pub async fn featured_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<DinosaurResponse>, (StatusCode, String)> {
    let today = Local::now().date_naive();
    app_state
        .catalog
        .daily_feature(today)
        .map(|dino| Json(dino.into()))
        .ok_or_else(|| (StatusCode::NOT_FOUND, "The catalog is empty".to_string()))
}

/// Markers for the fossil map.
#[utoipa::path(
    get,
    path = "/map",
    responses((status = 200, description = "Map markers", body = Vec<MapMarkerResponse>))
)]
pub async fn map_handler(State(app_state): State<Arc<AppState>>) -> Json<Vec<MapMarkerResponse>> {
    Json(
        app_state
            .catalog
            .map_markers()
            .map(MapMarkerResponse::from)
            .collect(),
    )
}

/// The values each Browse selector accepts.
#[utoipa::path(
    get,
    path = "/facets",
    responses((status = 200, description = "Selector choices", body = FacetsResponse))
)]
pub async fn facets_handler() -> Json<FacetsResponse> {
    Json(FacetsResponse::new())
}

//! services/api/src/web/view.rs
//!
//! View-router endpoints for thin clients that keep their screen state on the server.

use crate::web::{
    protocol::{FilterQuery, NavigateRequest, SelectRequest, ViewResponse},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Local;
use dino_explorer_core::{Screen, ViewRouter};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

fn view_not_found(view_id: Uuid) -> (StatusCode, String) {
    (
        StatusCode::NOT_FOUND,
        format!("View session {} not found", view_id),
    )
}

fn render(app_state: &AppState, view_id: Uuid, router: &ViewRouter) -> ViewResponse {
    let today = Local::now().date_naive();
    ViewResponse {
        view_id,
        screen: router.screen().to_string(),
        content: router.render(&app_state.catalog, today).into(),
    }
}

/// Run `update` against a view session and return the rendered result.
async fn with_view<F>(
    app_state: &AppState,
    view_id: Uuid,
    update: F,
) -> Result<Json<ViewResponse>, (StatusCode, String)>
where
    F: FnOnce(&mut ViewRouter) -> Result<(), (StatusCode, String)>,
{
    let mut views = app_state.views.lock().await;
    let router = views
        .get_mut(&view_id)
        .ok_or_else(|| view_not_found(view_id))?;
    update(router)?;
    Ok(Json(render(app_state, view_id, router)))
}

/// Create a view session on the Home screen.
#[utoipa::path(
    post,
    path = "/views",
    responses((status = 201, description = "View created", body = ViewResponse))
)]
pub async fn create_view_handler(
    State(app_state): State<Arc<AppState>>,
) -> (StatusCode, Json<ViewResponse>) {
    let view_id = Uuid::new_v4();
    let router = ViewRouter::new();
    let response = render(&app_state, view_id, &router);

    app_state.views.lock().await.insert(view_id, router);
    info!("View session {} created.", view_id);
    (StatusCode::CREATED, Json(response))
}

/// Render the active screen.
#[utoipa::path(
    get,
    path = "/views/{view_id}",
    params(("view_id" = Uuid, Path, description = "The view session id.")),
    responses(
        (status = 200, description = "Rendered screen", body = ViewResponse),
        (status = 404, description = "No such view session")
    )
)]
pub async fn get_view_handler(
    State(app_state): State<Arc<AppState>>,
    Path(view_id): Path<Uuid>,
) -> Result<Json<ViewResponse>, (StatusCode, String)> {
    with_view(&app_state, view_id, |_| Ok(())).await
}

/// Switch screens.
#[utoipa::path(
    post,
    path = "/views/{view_id}/navigate",
    params(("view_id" = Uuid, Path, description = "The view session id.")),
    request_body = NavigateRequest,
    responses(
        (status = 200, description = "Rendered screen", body = ViewResponse),
        (status = 400, description = "Unknown screen"),
        (status = 404, description = "No such view session")
    )
)]
pub async fn navigate_handler(
    State(app_state): State<Arc<AppState>>,
    Path(view_id): Path<Uuid>,
    Json(request): Json<NavigateRequest>,
) -> Result<Json<ViewResponse>, (StatusCode, String)> {
    let screen: Screen = request
        .screen
        .parse()
        .map_err(|e: dino_explorer_core::view::UnknownScreen| {
            (StatusCode::BAD_REQUEST, e.to_string())
        })?;

    with_view(&app_state, view_id, |router| {
        debug!("View {} -> {}", view_id, screen);
        router.navigate(screen);
        Ok(())
    })
    .await
}

/// Select a dinosaur and open its detail screen.
#[utoipa::path(
    post,
    path = "/views/{view_id}/select",
    params(("view_id" = Uuid, Path, description = "The view session id.")),
    request_body = SelectRequest,
    responses(
        (status = 200, description = "Detail screen", body = ViewResponse),
        (status = 404, description = "No such view session or dinosaur")
    )
)]
pub async fn select_handler(
    State(app_state): State<Arc<AppState>>,
    Path(view_id): Path<Uuid>,
    Json(request): Json<SelectRequest>,
) -> Result<Json<ViewResponse>, (StatusCode, String)> {
    let dinosaur = app_state
        .catalog
        .get(&request.dinosaur_id)
        .cloned()
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                format!("Dinosaur '{}' not found", request.dinosaur_id),
            )
        })?;

    with_view(&app_state, view_id, |router| {
        router.select_record(dinosaur);
        Ok(())
    })
    .await
}

/// Replace the Browse selectors.
#[utoipa::path(
    put,
    path = "/views/{view_id}/filters",
    params(("view_id" = Uuid, Path, description = "The view session id.")),
    request_body = FilterQuery,
    responses(
        (status = 200, description = "Rendered screen", body = ViewResponse),
        (status = 400, description = "Unknown facet value"),
        (status = 404, description = "No such view session")
    )
)]
pub async fn set_filters_handler(
    State(app_state): State<Arc<AppState>>,
    Path(view_id): Path<Uuid>,
    Json(request): Json<FilterQuery>,
) -> Result<Json<ViewResponse>, (StatusCode, String)> {
    let criteria = request
        .into_criteria()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    with_view(&app_state, view_id, |router| {
        router.set_filters(criteria);
        Ok(())
    })
    .await
}

/// Reset every Browse selector to "All".
#[utoipa::path(
    delete,
    path = "/views/{view_id}/filters",
    params(("view_id" = Uuid, Path, description = "The view session id.")),
    responses(
        (status = 200, description = "Rendered screen", body = ViewResponse),
        (status = 404, description = "No such view session")
    )
)]
pub async fn clear_filters_handler(
    State(app_state): State<Arc<AppState>>,
    Path(view_id): Path<Uuid>,
) -> Result<Json<ViewResponse>, (StatusCode, String)> {
    with_view(&app_state, view_id, |router| {
        router.clear_filters();
        Ok(())
    })
    .await
}

/// Discard a view session.
#[utoipa::path(
    delete,
    path = "/views/{view_id}",
    params(("view_id" = Uuid, Path, description = "The view session id.")),
    responses(
        (status = 204, description = "View session removed"),
        (status = 404, description = "No such view session")
    )
)]
pub async fn delete_view_handler(
    State(app_state): State<Arc<AppState>>,
    Path(view_id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    app_state
        .views
        .lock()
        .await
        .remove(&view_id)
        .ok_or_else(|| view_not_found(view_id))?;
    info!("View session {} removed.", view_id);
    Ok(StatusCode::NO_CONTENT)
}

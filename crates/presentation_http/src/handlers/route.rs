//! Route search handler

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use domain::{RoutePlan, RouteQuery};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Search routes between two labelled places
///
/// POST /api/route
#[instrument(skip(state, payload))]
pub async fn search_route(
    State(state): State<AppState>,
    payload: Result<Json<RouteQuery>, JsonRejection>,
) -> Result<Json<RoutePlan>, ApiError> {
    let Json(query) = payload?;
    Ok(Json(state.transport_service.search_route(&query).await))
}

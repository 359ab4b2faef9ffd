//! Nearby stops and POIs handler

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use domain::{NearbyQuery, NearbyResult};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Stops and points of interest around a coordinate
///
/// GET /api/nearby?lat=..&lng=..
#[instrument(skip(state, params))]
pub async fn get_nearby(
    State(state): State<AppState>,
    params: Result<Query<NearbyQuery>, QueryRejection>,
) -> Result<Json<NearbyResult>, ApiError> {
    let Query(query) = params?;
    Ok(Json(
        state.transport_service.get_nearby(query.lat, query.lng).await,
    ))
}

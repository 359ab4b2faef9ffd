//! Map layer handlers

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use domain::{GeoFeature, MtrStationList};
use serde::Deserialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Query parameters for the geo feature layer
#[derive(Debug, Default, Deserialize)]
pub struct GeoFeaturesParams {
    /// Layer name; only traced
    #[serde(default)]
    pub layer: String,
}

/// GeoJSON point features for a named layer
///
/// GET /api/geo-features?layer=..
#[instrument(skip(state, params))]
pub async fn fetch_geo_features(
    State(state): State<AppState>,
    params: Result<Query<GeoFeaturesParams>, QueryRejection>,
) -> Result<Json<Vec<GeoFeature>>, ApiError> {
    let Query(params) = params?;
    Ok(Json(
        state.transport_service.fetch_geo_features(&params.layer).await,
    ))
}

/// Stations of the sample MTR network
///
/// GET /api/mtr-geo/stations
pub async fn list_mtr_stations(State(state): State<AppState>) -> Json<MtrStationList> {
    Json(state.transport_service.list_mtr_stations().await)
}

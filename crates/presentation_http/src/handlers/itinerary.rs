//! Itinerary handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use domain::{ItineraryPlan, ItineraryPlanRequest, ItineraryRequest, ItineraryResult};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Solve an itinerary over an ordered list of stops
///
/// POST /api/itinerary/solve
#[instrument(skip(state, payload))]
pub async fn solve_itinerary(
    State(state): State<AppState>,
    payload: Result<Json<ItineraryRequest>, JsonRejection>,
) -> Result<Json<ItineraryResult>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(state.transport_service.solve_itinerary(&request).await))
}

/// POST /api/itinerary/save
#[instrument(skip(state, payload))]
pub async fn save_itinerary(
    State(state): State<AppState>,
    payload: Result<Json<ItineraryRequest>, JsonRejection>,
) -> Result<Json<ItineraryResult>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(state.transport_service.save_itinerary(&request).await))
}

/// Text plan visiting the given places in order
///
/// POST /api/itinerary/generate
#[instrument(skip(state, payload))]
pub async fn generate_itinerary(
    State(state): State<AppState>,
    payload: Result<Json<ItineraryPlanRequest>, JsonRejection>,
) -> Result<Json<ItineraryPlan>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(
        state
            .transport_service
            .generate_itinerary_steps(&request.places),
    ))
}

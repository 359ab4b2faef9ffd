//! Route definitions

use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};

use crate::{error::ApiError, handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Banner and health
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health_check))
        // Routing and nearby
        .route("/api/route", post(handlers::route::search_route))
        .route("/api/nearby", get(handlers::nearby::get_nearby))
        // Itinerary
        .route("/api/itinerary/solve", post(handlers::itinerary::solve_itinerary))
        .route("/api/itinerary/save", post(handlers::itinerary::save_itinerary))
        .route(
            "/api/itinerary/generate",
            post(handlers::itinerary::generate_itinerary),
        )
        // Map layers
        .route("/api/geo-features", get(handlers::geo::fetch_geo_features))
        .route("/api/mtr-geo/stations", get(handlers::geo::list_mtr_stations))
        .fallback(not_found)
        // Attach state
        .with_state(state)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

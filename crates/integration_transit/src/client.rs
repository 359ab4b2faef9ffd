//! Mock transit client
//!
//! Answers every request from the fixture table after a configured delay.
//! No request is ever rejected and no state is kept between calls.

use std::time::Duration;

use domain::{
    GeoFeature, GeoLocation, ItineraryRequest, ItineraryResult, MtrStationList, NearbyResult,
    RoutePlan, RouteQuery,
};
use tokio::time::sleep;
use tracing::{debug, instrument};

use crate::config::MockTransitConfig;
use crate::fixtures;

/// Fixture-backed transport data client
#[derive(Debug, Clone, Default)]
pub struct MockTransitClient {
    config: MockTransitConfig,
}

impl MockTransitClient {
    /// Create a new mock client
    #[must_use]
    pub fn new(config: &MockTransitConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Client that answers without any delay
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            config: MockTransitConfig::instant(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &MockTransitConfig {
        &self.config
    }

    /// Search for routes between the query's start and end labels
    #[instrument(skip(self))]
    pub async fn search_route(&self, query: &RouteQuery) -> RoutePlan {
        simulate_latency(self.config.route_delay()).await;
        let plan = fixtures::route_plan(query);
        debug!(routes = plan.routes.len(), "Route search answered");
        plan
    }

    /// Find stops and points of interest near a coordinate
    #[instrument(skip(self))]
    pub async fn get_nearby(&self, latitude: f64, longitude: f64) -> NearbyResult {
        simulate_latency(self.config.nearby_delay()).await;
        let result = fixtures::nearby(GeoLocation::new(latitude, longitude));
        debug!(
            stops = result.stops.len(),
            pois = result.pois.len(),
            "Nearby search answered"
        );
        result
    }

    /// Solve an itinerary over the requested stops
    #[instrument(skip(self))]
    pub async fn solve_itinerary(&self, request: &ItineraryRequest) -> ItineraryResult {
        simulate_latency(self.config.itinerary_delay()).await;
        fixtures::itinerary(request)
    }

    /// Fetch point features for a layer
    ///
    /// The layer name is traced but does not filter the result.
    #[instrument(skip(self))]
    pub async fn fetch_geo_features(&self, layer_name: &str) -> Vec<GeoFeature> {
        simulate_latency(self.config.geo_features_delay()).await;
        let features = fixtures::geo_features();
        debug!(count = features.len(), "Geo features answered");
        features
    }

    /// List the sample MTR stations
    #[instrument(skip(self))]
    pub async fn list_mtr_stations(&self) -> MtrStationList {
        simulate_latency(self.config.nearby_delay()).await;
        fixtures::mtr_stations()
    }
}

/// Wait out the simulated network latency
async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        sleep(delay).await;
    }
}

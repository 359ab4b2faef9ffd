//! Transport data port
//!
//! Defines the boundary to the transport backend. The fixture-backed adapter
//! in the infrastructure layer implements it today; a real backend adapter
//! can replace it without touching callers.

use async_trait::async_trait;
use domain::{
    GeoFeature, ItineraryRequest, ItineraryResult, MtrStationList, NearbyResult, RoutePlan,
    RouteQuery,
};
#[cfg(test)]
use mockall::automock;

/// Port for transport data lookups
///
/// Operations always complete with a payload.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TransportDataPort: Send + Sync {
    /// Search for candidate routes
    async fn search_route(&self, query: &RouteQuery) -> RoutePlan;

    /// Find transit stops and points of interest around a coordinate
    async fn get_nearby(&self, latitude: f64, longitude: f64) -> NearbyResult;

    /// Solve an itinerary over an ordered list of stops
    async fn solve_itinerary(&self, request: &ItineraryRequest) -> ItineraryResult;

    /// Fetch GeoJSON point features for a named layer
    async fn fetch_geo_features(&self, layer_name: &str) -> Vec<GeoFeature>;

    /// List stations of the MTR network map
    async fn list_mtr_stations(&self) -> MtrStationList;
}

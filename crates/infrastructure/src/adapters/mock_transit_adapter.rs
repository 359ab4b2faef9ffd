//! Mock transit adapter - Implements TransportDataPort using integration_transit

use application::ports::TransportDataPort;
use async_trait::async_trait;
use domain::{
    GeoFeature, ItineraryRequest, ItineraryResult, MtrStationList, NearbyResult, RoutePlan,
    RouteQuery,
};
use integration_transit::{MockTransitClient, MockTransitConfig};
use tracing::{debug, instrument};

/// Adapter serving fixture data through the transport data port
#[derive(Debug, Clone, Default)]
pub struct MockTransitAdapter {
    client: MockTransitClient,
}

impl MockTransitAdapter {
    /// Create a new adapter around an existing client
    #[must_use]
    pub const fn new(client: MockTransitClient) -> Self {
        Self { client }
    }

    /// Create an adapter from latency configuration
    #[must_use]
    pub fn from_config(config: &MockTransitConfig) -> Self {
        Self::new(MockTransitClient::new(config))
    }

    /// Access the underlying client
    #[must_use]
    pub const fn client(&self) -> &MockTransitClient {
        &self.client
    }
}

#[async_trait]
impl TransportDataPort for MockTransitAdapter {
    #[instrument(skip(self, query))]
    async fn search_route(&self, query: &RouteQuery) -> RoutePlan {
        let plan = self.client.search_route(query).await;
        debug!(routes = plan.routes.len(), "Route search served from fixtures");
        plan
    }

    #[instrument(skip(self))]
    async fn get_nearby(&self, latitude: f64, longitude: f64) -> NearbyResult {
        self.client.get_nearby(latitude, longitude).await
    }

    #[instrument(skip(self, request))]
    async fn solve_itinerary(&self, request: &ItineraryRequest) -> ItineraryResult {
        self.client.solve_itinerary(request).await
    }

    #[instrument(skip(self))]
    async fn fetch_geo_features(&self, layer_name: &str) -> Vec<GeoFeature> {
        let features = self.client.fetch_geo_features(layer_name).await;
        debug!(count = features.len(), "Geo features served from fixtures");
        features
    }

    #[instrument(skip(self))]
    async fn list_mtr_stations(&self) -> MtrStationList {
        self.client.list_mtr_stations().await
    }
}

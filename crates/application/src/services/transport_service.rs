//! Transport service
//!
//! Entry points used by the presentation layer. Each call is forwarded to the
//! configured [`TransportDataPort`]; `save_itinerary` is kept as a second name
//! for `solve_itinerary` because older client screens still call it.

use std::fmt;
use std::sync::Arc;

use domain::{
    GeoFeature, ItineraryPlan, ItineraryRequest, ItineraryResult, MtrStationList, NearbyResult,
    RoutePlan, RouteQuery,
};
use tracing::{info, instrument};

use crate::ports::TransportDataPort;

/// Use-case facade over the transport data port
#[derive(Clone)]
pub struct TransportService {
    port: Arc<dyn TransportDataPort>,
}

impl fmt::Debug for TransportService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportService")
            .field("port", &"<TransportDataPort>")
            .finish()
    }
}

impl TransportService {
    /// Create a new transport service
    #[must_use]
    pub fn new(port: Arc<dyn TransportDataPort>) -> Self {
        Self { port }
    }

    #[instrument(skip(self, query), fields(start = %query.start, end = %query.end))]
    pub async fn search_route(&self, query: &RouteQuery) -> RoutePlan {
        info!(
            preference = %query.preference,
            mode = %query.transport_mode,
            "searchRoute called"
        );
        self.port.search_route(query).await
    }

    #[instrument(skip(self))]
    pub async fn get_nearby(&self, latitude: f64, longitude: f64) -> NearbyResult {
        info!("getNearby called");
        self.port.get_nearby(latitude, longitude).await
    }

    #[instrument(skip(self, request), fields(stops = request.stops.len(), tourist_mode = request.tourist_mode))]
    pub async fn solve_itinerary(&self, request: &ItineraryRequest) -> ItineraryResult {
        info!("solveItinerary called");
        self.port.solve_itinerary(request).await
    }

    /// Alias of [`Self::solve_itinerary`]
    pub async fn save_itinerary(&self, request: &ItineraryRequest) -> ItineraryResult {
        self.solve_itinerary(request).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_geo_features(&self, layer_name: &str) -> Vec<GeoFeature> {
        info!(layer = %layer_name, "fetchGeoFeatures called");
        self.port.fetch_geo_features(layer_name).await
    }

    #[instrument(skip(self))]
    pub async fn list_mtr_stations(&self) -> MtrStationList {
        self.port.list_mtr_stations().await
    }

    /// Build a step-by-step text plan for the given places
    ///
    /// Pure text assembly; does not consult the port.
    #[must_use]
    pub fn generate_itinerary_steps(&self, places: &[String]) -> ItineraryPlan {
        ItineraryPlan::from_places(places)
    }
}

#[cfg(test)]
mod tests {
    use domain::{Itinerary, ItineraryPoi, RoutePreference, TransportMode};

    use super::*;
    use crate::ports::MockTransportDataPort;

    fn echo_itinerary(request: &ItineraryRequest) -> ItineraryResult {
        ItineraryResult {
            itinerary: Itinerary {
                total_time: 120,
                total_fare: 45.0,
                stops: request.stops.clone(),
                pois: if request.tourist_mode {
                    vec![ItineraryPoi {
                        name: "Museum".to_string(),
                        dwell_time: 120,
                    }]
                } else {
                    vec![]
                },
            },
        }
    }

    #[tokio::test]
    async fn save_itinerary_goes_through_solve() {
        let mut port = MockTransportDataPort::new();
        port.expect_solve_itinerary()
            .times(2)
            .returning(echo_itinerary);

        let service = TransportService::new(Arc::new(port));
        let request = ItineraryRequest::new(["Central", "Stanley"], true);

        let solved = service.solve_itinerary(&request).await;
        let saved = service.save_itinerary(&request).await;
        assert_eq!(solved, saved);
    }

    #[tokio::test]
    async fn search_route_forwards_query() {
        let mut port = MockTransportDataPort::new();
        port.expect_search_route()
            .withf(|q| q.start == "Central" && q.transport_mode == TransportMode::Bus)
            .times(1)
            .returning(|_| RoutePlan { routes: vec![] });

        let service = TransportService::new(Arc::new(port));
        let query = RouteQuery::new("Central", "TST", RoutePreference::Cheapest, TransportMode::Bus);
        let plan = service.search_route(&query).await;
        assert!(plan.routes.is_empty());
    }

    #[tokio::test]
    async fn get_nearby_forwards_coordinates() {
        let mut port = MockTransportDataPort::new();
        port.expect_get_nearby()
            .withf(|lat, lng| (*lat - 22.3).abs() < f64::EPSILON && (*lng - 114.2).abs() < f64::EPSILON)
            .times(1)
            .returning(|_, _| NearbyResult {
                stops: vec![],
                pois: vec![],
            });

        let service = TransportService::new(Arc::new(port));
        let result = service.get_nearby(22.3, 114.2).await;
        assert!(result.stops.is_empty());
    }

    #[tokio::test]
    async fn fetch_geo_features_passes_layer_name() {
        let mut port = MockTransportDataPort::new();
        port.expect_fetch_geo_features()
            .withf(|layer| layer == "MAJOR_MINES_Layer")
            .times(1)
            .returning(|_| vec![]);

        let service = TransportService::new(Arc::new(port));
        assert!(service.fetch_geo_features("MAJOR_MINES_Layer").await.is_empty());
    }

    #[test]
    fn generate_steps_does_not_touch_port() {
        let service = TransportService::new(Arc::new(MockTransportDataPort::new()));
        let plan = service.generate_itinerary_steps(&["Central".to_string()]);
        assert_eq!(plan.steps, vec!["Start at Central.", "Itinerary complete."]);
    }

    #[test]
    fn debug_hides_port() {
        let service = TransportService::new(Arc::new(MockTransportDataPort::new()));
        assert!(format!("{service:?}").contains("<TransportDataPort>"));
    }
}

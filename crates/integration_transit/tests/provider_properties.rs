//! Property tests for the mock transit provider
//!
//! Every property runs against an instant client so no test waits on the
//! simulated latency.

use domain::{ItineraryRequest, RoutePreference, RouteQuery, TransportMode};
use integration_transit::{MockTransitClient, fixtures};
use proptest::prelude::*;

fn mode_strategy() -> impl Strategy<Value = TransportMode> {
    prop::sample::select(TransportMode::ALL.to_vec())
}

fn preference_strategy() -> impl Strategy<Value = RoutePreference> {
    prop::sample::select(RoutePreference::ALL.to_vec())
}

proptest! {
    #[test]
    fn route_search_always_returns_three_steps(
        start in "\\PC{0,30}",
        end in "\\PC{0,30}",
        preference in preference_strategy(),
        mode in mode_strategy()
    ) {
        let client = MockTransitClient::instant();
        let query = RouteQuery::new(start.clone(), end.clone(), preference, mode);
        let plan = tokio_test::block_on(client.search_route(&query));

        prop_assert_eq!(plan.routes.len(), 1);
        let steps = &plan.routes[0].steps;
        prop_assert_eq!(steps.len(), 3);
        prop_assert!(steps[0].instruction.contains(start.as_str()));
        prop_assert!(steps[1].instruction.contains(mode.as_str().to_uppercase().as_str()));
        prop_assert!(steps[1].instruction.contains(preference.as_str()));
        prop_assert!(steps[2].instruction.contains(end.as_str()));
    }

    #[test]
    fn nearby_coordinates_are_fixed_offsets(
        lat in -90.0f64..=90.0f64,
        lng in -180.0f64..=180.0f64
    ) {
        let client = MockTransitClient::instant();
        let result = tokio_test::block_on(client.get_nearby(lat, lng));

        prop_assert_eq!(result.stops.len(), 2);
        prop_assert_eq!(result.pois.len(), 2);

        for (stop, fixture) in result.stops.iter().zip(fixtures::NEARBY_STOPS.iter()) {
            prop_assert_eq!(stop.lat, lat + fixture.lat_offset);
            prop_assert_eq!(stop.lon, lng + fixture.lng_offset);
            prop_assert_eq!(stop.dist_m, fixture.dist_m);
        }
        for (poi, fixture) in result.pois.iter().zip(fixtures::NEARBY_POIS.iter()) {
            prop_assert_eq!(poi.lat, lat + fixture.lat_offset);
            prop_assert_eq!(poi.lon, lng + fixture.lng_offset);
        }

        let again = tokio_test::block_on(client.get_nearby(lat, lng));
        prop_assert_eq!(result, again);
    }

    #[test]
    fn itinerary_pois_follow_tourist_mode(
        stops in prop::collection::vec("[A-Za-z ]{1,16}", 0..8),
        tourist_mode in any::<bool>()
    ) {
        let client = MockTransitClient::instant();
        let request = ItineraryRequest::new(stops.clone(), tourist_mode);
        let result = tokio_test::block_on(client.solve_itinerary(&request));

        prop_assert_eq!(&result.itinerary.stops, &stops);
        prop_assert_eq!(result.itinerary.total_time, fixtures::ITINERARY_TOTAL_TIME_MIN);
        prop_assert_eq!(result.itinerary.total_fare, fixtures::ITINERARY_TOTAL_FARE);
        prop_assert_eq!(result.itinerary.pois.len(), usize::from(tourist_mode));
    }

    #[test]
    fn geo_features_ignore_layer_name(layer in "\\PC{0,40}") {
        let client = MockTransitClient::instant();
        let features = tokio_test::block_on(client.fetch_geo_features(&layer));
        let baseline = tokio_test::block_on(client.fetch_geo_features("MAJOR_MINES_Layer"));
        prop_assert_eq!(features.len(), 2);
        prop_assert_eq!(features, baseline);
    }
}

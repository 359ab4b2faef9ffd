//! Sample payload fixtures
//!
//! Every value the mock provider returns comes from this table. Operation
//! logic in [`crate::client`] only combines these constants with the caller's
//! input, so swapping in a real backend means replacing this module and the
//! client, nothing else.

use domain::{
    GeoFeature, GeoLocation, Itinerary, ItineraryPoi, ItineraryRequest, ItineraryResult,
    MtrStation, MtrStationList, NearbyPoi, NearbyResult, NearbyStop, RouteLeg, RouteOption,
    RoutePlan, RouteQuery, RouteStep, TransportMode,
};

/// Bumped whenever any fixture value changes
pub const FIXTURE_VERSION: u32 = 1;

// --- Route search ---

/// Fixed route anchor: Central
pub const ROUTE_START: GeoLocation = GeoLocation::new(22.2855, 114.1582);
/// Fixed route anchor: Tsim Sha Tsui
pub const ROUTE_END: GeoLocation = GeoLocation::new(22.3193, 114.1694);
pub const ROUTE_TIME_LABEL: &str = "55 min (MOCK)";
pub const ROUTE_FARE: f64 = 14.5;
pub const ROUTE_TRANSFERS: u32 = 1;
pub const ROUTE_POLYLINE: &str =
    "wvteEw~cEyLd@e@kBh@oAhBcD`AcCfA{C`@oA`@uAn@yB`A{E`AaDj@mBb@sAj@wA";

// --- Nearby search ---

/// A stop placed at a fixed offset from the query coordinate
#[derive(Debug, Clone, Copy)]
pub struct StopFixture {
    pub name: &'static str,
    pub lat_offset: f64,
    pub lng_offset: f64,
    pub dist_m: u32,
    pub stop_type: TransportMode,
}

/// A point of interest placed at a fixed offset from the query coordinate
#[derive(Debug, Clone, Copy)]
pub struct PoiFixture {
    pub name: &'static str,
    pub lat_offset: f64,
    pub lng_offset: f64,
    pub category: &'static str,
}

pub const NEARBY_STOPS: [StopFixture; 2] = [
    StopFixture {
        name: "MOCK Bus Stop",
        lat_offset: 0.005,
        lng_offset: 0.005,
        dist_m: 500,
        stop_type: TransportMode::Bus,
    },
    StopFixture {
        name: "MOCK MTR Station",
        lat_offset: -0.002,
        lng_offset: 0.001,
        dist_m: 250,
        stop_type: TransportMode::Mtr,
    },
];

pub const NEARBY_POIS: [PoiFixture; 2] = [
    PoiFixture {
        name: "MOCK Museum POI",
        lat_offset: 0.001,
        lng_offset: -0.004,
        category: "museum",
    },
    PoiFixture {
        name: "MOCK Park POI",
        lat_offset: -0.003,
        lng_offset: -0.001,
        category: "park",
    },
];

// --- Itinerary ---

/// Total time in minutes, independent of the number of stops
pub const ITINERARY_TOTAL_TIME_MIN: u32 = 120;
/// Total fare, independent of the number of stops
pub const ITINERARY_TOTAL_FARE: f64 = 45.0;
pub const TOURIST_POI_NAME: &str = "MOCK Museum";
pub const TOURIST_POI_DWELL_MIN: u32 = 120;

// --- Geo features ---

#[derive(Debug, Clone, Copy)]
pub struct GeoFeatureFixture {
    pub name: &'static str,
    pub category: &'static str,
    pub location: GeoLocation,
}

pub const GEO_FEATURES: [GeoFeatureFixture; 2] = [
    GeoFeatureFixture {
        name: "Mine Site A (MOCK)",
        category: "mine",
        location: GeoLocation::new(22.3300, 114.1705),
    },
    GeoFeatureFixture {
        name: "Quarry Site B (MOCK)",
        category: "quarry",
        location: GeoLocation::new(22.3500, 114.2000),
    },
];

// --- MTR sample network ---

#[derive(Debug, Clone, Copy)]
pub struct StationFixture {
    pub name: &'static str,
    pub line: &'static str,
    pub location: GeoLocation,
    pub color: &'static str,
}

pub const MTR_STATIONS: [StationFixture; 3] = [
    StationFixture {
        name: "Hong Kong",
        line: "TWL",
        location: GeoLocation::new(22.2849, 114.1589),
        color: "#ED1B24",
    },
    StationFixture {
        name: "Central",
        line: "TWL",
        location: GeoLocation::new(22.2820, 114.1588),
        color: "#ED1B24",
    },
    StationFixture {
        name: "Admiralty",
        line: "TWL",
        location: GeoLocation::new(22.2790, 114.1640),
        color: "#ED1B24",
    },
];

// --- Payload builders ---

/// Single-route plan echoing the query's labels, mode and preference
pub(crate) fn route_plan(query: &RouteQuery) -> RoutePlan {
    let mode = query.transport_mode.as_str().to_uppercase();
    RoutePlan {
        routes: vec![RouteOption {
            time: ROUTE_TIME_LABEL.to_string(),
            fare: ROUTE_FARE,
            transfers: ROUTE_TRANSFERS,
            polyline: ROUTE_POLYLINE.to_string(),
            legs: vec![RouteLeg {
                start_location: ROUTE_START,
                end_location: ROUTE_END,
            }],
            steps: vec![
                RouteStep::new(format!("MOCK: Walk from {}", query.start)),
                RouteStep::new(format!(
                    "MOCK: Take {mode} ({} route)",
                    query.preference
                )),
                RouteStep::new(format!("MOCK: Arrive at {}", query.end)),
            ],
        }],
    }
}

/// Stops and POIs at fixed offsets from `origin`
pub(crate) fn nearby(origin: GeoLocation) -> NearbyResult {
    let stops = NEARBY_STOPS
        .iter()
        .map(|fixture| {
            let loc = origin.offset(fixture.lat_offset, fixture.lng_offset);
            NearbyStop {
                name: fixture.name.to_string(),
                lat: loc.latitude(),
                lon: loc.longitude(),
                dist_m: fixture.dist_m,
                stop_type: fixture.stop_type,
            }
        })
        .collect();

    let pois = NEARBY_POIS
        .iter()
        .map(|fixture| {
            let loc = origin.offset(fixture.lat_offset, fixture.lng_offset);
            NearbyPoi {
                name: fixture.name.to_string(),
                lat: loc.latitude(),
                lon: loc.longitude(),
                category: fixture.category.to_string(),
            }
        })
        .collect();

    NearbyResult { stops, pois }
}

/// Fixed totals, echoed stops, one POI in tourist mode
pub(crate) fn itinerary(request: &ItineraryRequest) -> ItineraryResult {
    let pois = if request.tourist_mode {
        vec![ItineraryPoi {
            name: TOURIST_POI_NAME.to_string(),
            dwell_time: TOURIST_POI_DWELL_MIN,
        }]
    } else {
        Vec::new()
    };

    ItineraryResult {
        itinerary: Itinerary {
            total_time: ITINERARY_TOTAL_TIME_MIN,
            total_fare: ITINERARY_TOTAL_FARE,
            stops: request.stops.clone(),
            pois,
        },
    }
}

pub(crate) fn geo_features() -> Vec<GeoFeature> {
    GEO_FEATURES
        .iter()
        .map(|fixture| GeoFeature::point(fixture.name, fixture.category, fixture.location))
        .collect()
}

pub(crate) fn mtr_stations() -> MtrStationList {
    let stations = MTR_STATIONS
        .iter()
        .map(|fixture| MtrStation {
            name: fixture.name.to_string(),
            line: fixture.line.to_string(),
            lat: fixture.location.latitude(),
            lng: fixture.location.longitude(),
            color: fixture.color.to_string(),
        })
        .collect();
    MtrStationList { stations }
}

//! Domain entities - Request and result records exchanged with the provider

mod geo_feature;
mod itinerary;
mod mtr_station;
mod nearby;
mod route;

pub use geo_feature::{FeatureProperties, FeatureType, GeoFeature, GeometryType, PointGeometry};
pub use itinerary::{
    Itinerary, ItineraryPlan, ItineraryPlanRequest, ItineraryPoi, ItineraryRequest,
    ItineraryResult,
};
pub use mtr_station::{MtrStation, MtrStationList};
pub use nearby::{NearbyPoi, NearbyQuery, NearbyResult, NearbyStop};
pub use route::{RouteLeg, RouteOption, RoutePlan, RouteQuery, RouteStep};

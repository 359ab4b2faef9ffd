//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod route_preference;
mod transport_mode;

pub use geo_location::GeoLocation;
pub use route_preference::RoutePreference;
pub use transport_mode::TransportMode;

//! Geographic location value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic location with latitude and longitude
///
/// Serialized as `{"lat": .., "lng": ..}`, the ordering used by route and
/// nearby payloads. GeoJSON geometry uses the reverse order, see
/// [`crate::PointGeometry`].
///
/// Coordinates are not range-checked: the provider echoes whatever the
/// caller supplies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees
    lat: f64,
    /// Longitude in degrees
    lng: f64,
}

impl GeoLocation {
    /// Create a new location
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            lat: latitude,
            lng: longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.lat
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.lng
    }

    /// Shift this location by a fixed number of degrees on each axis
    #[must_use]
    pub fn offset(&self, lat_delta: f64, lng_delta: f64) -> Self {
        Self::new(self.lat + lat_delta, self.lng + lng_delta)
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// Common locations for defaults
impl GeoLocation {
    /// Central, Hong Kong Island
    #[must_use]
    pub const fn central() -> Self {
        Self::new(22.2855, 114.1582)
    }

    /// Tsim Sha Tsui, Kowloon
    #[must_use]
    pub const fn tsim_sha_tsui() -> Self {
        Self::new(22.3193, 114.1694)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let loc = GeoLocation::new(22.2855, 114.1582);
        assert!((loc.latitude() - 22.2855).abs() < f64::EPSILON);
        assert!((loc.longitude() - 114.1582).abs() < f64::EPSILON);
    }

    #[test]
    fn test_out_of_range_is_accepted() {
        let loc = GeoLocation::new(123.0, -500.0);
        assert!((loc.latitude() - 123.0).abs() < f64::EPSILON);
        assert!((loc.longitude() + 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_offset() {
        let loc = GeoLocation::central().offset(0.005, -0.004);
        assert!((loc.latitude() - 22.2905).abs() < 1e-9);
        assert!((loc.longitude() - 114.1542).abs() < 1e-9);
    }

    #[test]
    fn test_display() {
        let display = format!("{}", GeoLocation::central());
        assert!(display.contains("22.2855"));
        assert!(display.contains("114.1582"));
    }

    #[test]
    fn test_serialization_uses_lat_lng_keys() {
        let json = serde_json::to_value(GeoLocation::tsim_sha_tsui()).expect("serialize");
        assert_eq!(json["lat"], 22.3193);
        assert_eq!(json["lng"], 114.1694);

        let back: GeoLocation = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, GeoLocation::tsim_sha_tsui());
    }

    #[test]
    fn test_json_text_roundtrip_is_exact() {
        let loc = GeoLocation::new(0.0, 60.713_344_481_905_956);
        let json = serde_json::to_string(&loc).expect("serialize");
        let back: GeoLocation = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, loc);
    }
}

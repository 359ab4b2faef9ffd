//! Nearby stops and points of interest

use serde::{Deserialize, Serialize};

use crate::value_objects::{GeoLocation, TransportMode};

/// A coordinate to search around
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NearbyQuery {
    pub lat: f64,
    pub lng: f64,
}

impl NearbyQuery {
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        GeoLocation::new(self.lat, self.lng)
    }
}

/// Transit stops and points of interest around a coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyResult {
    pub stops: Vec<NearbyStop>,
    pub pois: Vec<NearbyPoi>,
}

/// A transit stop near the query location
///
/// Uses `lon` rather than `lng`, matching the stop payload consumers read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyStop {
    /// Stop name
    pub name: String,
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lon: f64,
    /// Walking distance from the query location in meters
    pub dist_m: u32,
    /// Kind of stop
    #[serde(rename = "type")]
    pub stop_type: TransportMode,
}

impl NearbyStop {
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        GeoLocation::new(self.lat, self.lon)
    }
}

/// A point of interest near the query location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyPoi {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Category label (museum, park, ...)
    #[serde(rename = "type")]
    pub category: String,
}

impl NearbyPoi {
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        GeoLocation::new(self.lat, self.lon)
    }
}

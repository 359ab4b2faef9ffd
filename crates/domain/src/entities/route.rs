//! Route search request and result

use serde::{Deserialize, Serialize};

use crate::value_objects::{GeoLocation, RoutePreference, TransportMode};

/// A request for candidate routes between two labelled places
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteQuery {
    /// Start label, as typed by the user
    pub start: String,
    /// End label, as typed by the user
    pub end: String,
    /// Optimisation preference
    pub preference: RoutePreference,
    /// Requested transport mode
    #[serde(rename = "transportMode")]
    pub transport_mode: TransportMode,
}

impl RouteQuery {
    /// Create a new route query
    #[must_use]
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        preference: RoutePreference,
        transport_mode: TransportMode,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            preference,
            transport_mode,
        }
    }
}

/// Result of a route search: an ordered list of candidate routes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Candidate routes, best first
    pub routes: Vec<RouteOption>,
}

/// A single candidate route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteOption {
    /// Estimated travel time, as a display label
    pub time: String,
    /// Fare in local currency
    pub fare: f64,
    /// Number of transfers
    pub transfers: u32,
    /// Encoded polyline of the route path
    pub polyline: String,
    /// Geographic legs of the route
    pub legs: Vec<RouteLeg>,
    /// Human-readable instructions, in travel order
    pub steps: Vec<RouteStep>,
}

/// A leg between two coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub start_location: GeoLocation,
    pub end_location: GeoLocation,
}

/// One instruction step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteStep {
    pub instruction: String,
}

impl RouteStep {
    #[must_use]
    pub fn new(instruction: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
        }
    }
}

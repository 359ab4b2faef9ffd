//! Mock transit provider configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Simulated latency for each provider operation
///
/// Every operation completes after its delay and never earlier. A delay of
/// zero skips the timer entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockTransitConfig {
    /// Route search latency in milliseconds
    #[serde(default = "default_request_delay_ms")]
    pub route_delay_ms: u64,

    /// Nearby search latency in milliseconds (also used for the station list)
    #[serde(default = "default_request_delay_ms")]
    pub nearby_delay_ms: u64,

    /// Itinerary solve latency in milliseconds
    #[serde(default = "default_request_delay_ms")]
    pub itinerary_delay_ms: u64,

    /// Geo feature fetch latency in milliseconds
    #[serde(default = "default_geo_features_delay_ms")]
    pub geo_features_delay_ms: u64,
}

const fn default_request_delay_ms() -> u64 {
    300
}

const fn default_geo_features_delay_ms() -> u64 {
    500
}

impl Default for MockTransitConfig {
    fn default() -> Self {
        Self {
            route_delay_ms: default_request_delay_ms(),
            nearby_delay_ms: default_request_delay_ms(),
            itinerary_delay_ms: default_request_delay_ms(),
            geo_features_delay_ms: default_geo_features_delay_ms(),
        }
    }
}

impl MockTransitConfig {
    /// Configuration with every delay set to zero
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            route_delay_ms: 0,
            nearby_delay_ms: 0,
            itinerary_delay_ms: 0,
            geo_features_delay_ms: 0,
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub const fn for_testing() -> Self {
        Self::instant()
    }

    #[must_use]
    pub const fn route_delay(&self) -> Duration {
        Duration::from_millis(self.route_delay_ms)
    }

    #[must_use]
    pub const fn nearby_delay(&self) -> Duration {
        Duration::from_millis(self.nearby_delay_ms)
    }

    #[must_use]
    pub const fn itinerary_delay(&self) -> Duration {
        Duration::from_millis(self.itinerary_delay_ms)
    }

    #[must_use]
    pub const fn geo_features_delay(&self) -> Duration {
        Duration::from_millis(self.geo_features_delay_ms)
    }

    /// Check if any operation is delayed
    #[must_use]
    pub const fn is_instant(&self) -> bool {
        self.route_delay_ms == 0
            && self.nearby_delay_ms == 0
            && self.itinerary_delay_ms == 0
            && self.geo_features_delay_ms == 0
    }
}

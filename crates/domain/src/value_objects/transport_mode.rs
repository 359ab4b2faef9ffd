//! Transport mode value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mode of transport requested for a route, or served by a stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// Any public transit
    Transit,
    /// Franchised bus
    Bus,
    /// Mass Transit Railway
    Mtr,
    /// Taxi
    Taxi,
}

impl TransportMode {
    /// All modes, in wire order
    pub const ALL: [Self; 4] = [Self::Transit, Self::Bus, Self::Mtr, Self::Taxi];

    /// Wire name of the mode
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Transit => "transit",
            Self::Bus => "bus",
            Self::Mtr => "mtr",
            Self::Taxi => "taxi",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "transit" => Ok(Self::Transit),
            "bus" => Ok(Self::Bus),
            "mtr" => Ok(Self::Mtr),
            "taxi" => Ok(Self::Taxi),
            _ => Err(format!(
                "Invalid transport mode: {s}. Use 'transit', 'bus', 'mtr' or 'taxi'"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        for mode in TransportMode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.as_str()));
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("MTR".parse::<TransportMode>().unwrap(), TransportMode::Mtr);
        assert_eq!("Bus".parse::<TransportMode>().unwrap(), TransportMode::Bus);
    }

    #[test]
    fn test_from_str_invalid() {
        let err = "ferry".parse::<TransportMode>().unwrap_err();
        assert!(err.contains("Invalid transport mode"));
    }

    #[test]
    fn test_rail_is_not_a_wire_name() {
        assert!(serde_json::from_str::<TransportMode>("\"rail\"").is_err());
    }
}

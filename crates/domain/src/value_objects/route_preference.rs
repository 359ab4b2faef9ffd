//! Route optimisation preference

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a route search should optimise for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutePreference {
    /// Shortest travel time
    Fastest,
    /// Lowest fare
    Cheapest,
    /// Fewest transfers
    Fewest,
}

impl RoutePreference {
    /// All preferences, in wire order
    pub const ALL: [Self; 3] = [Self::Fastest, Self::Cheapest, Self::Fewest];

    /// Wire name of the preference
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fastest => "fastest",
            Self::Cheapest => "cheapest",
            Self::Fewest => "fewest",
        }
    }
}

impl fmt::Display for RoutePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoutePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fastest" => Ok(Self::Fastest),
            "cheapest" => Ok(Self::Cheapest),
            "fewest" => Ok(Self::Fewest),
            _ => Err(format!(
                "Invalid route preference: {s}. Use 'fastest', 'cheapest' or 'fewest'"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_wire_name() {
        for pref in RoutePreference::ALL {
            let json = serde_json::to_string(&pref).unwrap();
            assert_eq!(json, format!("\"{pref}\""));
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "fewest".parse::<RoutePreference>().unwrap(),
            RoutePreference::Fewest
        );
        assert!("slowest".parse::<RoutePreference>().is_err());
    }
}

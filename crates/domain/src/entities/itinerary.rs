//! Itinerary requests, results and text plans

use serde::{Deserialize, Serialize};

/// A request to solve an itinerary over an ordered list of stops
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryRequest {
    /// Stop labels in visiting order
    pub stops: Vec<String>,
    /// Include sightseeing points of interest
    pub tourist_mode: bool,
}

impl ItineraryRequest {
    #[must_use]
    pub fn new<I, S>(stops: I, tourist_mode: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stops: stops.into_iter().map(Into::into).collect(),
            tourist_mode,
        }
    }
}

/// Envelope returned by the itinerary solver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryResult {
    pub itinerary: Itinerary,
}

/// A solved itinerary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    /// Total travel time in minutes
    pub total_time: u32,
    /// Total fare in local currency
    pub total_fare: f64,
    /// The requested stops, unchanged
    pub stops: Vec<String>,
    /// Sightseeing stops; empty unless tourist mode was requested
    pub pois: Vec<ItineraryPoi>,
}

/// A sightseeing stop with a suggested dwell time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryPoi {
    pub name: String,
    /// Suggested time to spend, in minutes
    pub dwell_time: u32,
}

/// A request for a step-by-step text plan over a list of places
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryPlanRequest {
    pub places: Vec<String>,
}

/// Step-by-step text plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryPlan {
    pub steps: Vec<String>,
}

impl ItineraryPlan {
    /// Build a plan that starts at the first place, travels to each
    /// following place in order, and ends with a completion line.
    #[must_use]
    pub fn from_places(places: &[String]) -> Self {
        let mut steps: Vec<String> = places
            .iter()
            .enumerate()
            .map(|(i, place)| {
                if i == 0 {
                    format!("Start at {place}.")
                } else {
                    format!("Then travel to {place}.")
                }
            })
            .collect();
        steps.push("Itinerary complete.".to_string());
        Self { steps }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request: ItineraryRequest =
            serde_json::from_str(r#"{"stops":["Central","Peak"],"tourist_mode":true}"#).unwrap();
        assert_eq!(request, ItineraryRequest::new(["Central", "Peak"], true));
    }

    #[test]
    fn test_request_requires_tourist_mode() {
        assert!(serde_json::from_str::<ItineraryRequest>(r#"{"stops":[]}"#).is_err());
    }

    #[test]
    fn test_plan_from_places() {
        let places = vec![
            "Central".to_string(),
            "Admiralty".to_string(),
            "Wan Chai".to_string(),
        ];
        let plan = ItineraryPlan::from_places(&places);
        assert_eq!(
            plan.steps,
            vec![
                "Start at Central.",
                "Then travel to Admiralty.",
                "Then travel to Wan Chai.",
                "Itinerary complete.",
            ]
        );
    }

    #[test]
    fn test_plan_from_no_places() {
        let plan = ItineraryPlan::from_places(&[]);
        assert_eq!(plan.steps, vec!["Itinerary complete."]);
    }

    #[test]
    fn test_result_wire_shape() {
        let result = ItineraryResult {
            itinerary: Itinerary {
                total_time: 120,
                total_fare: 45.0,
                stops: vec!["A".to_string()],
                pois: vec![],
            },
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["itinerary"]["total_time"], 120);
        assert_eq!(json["itinerary"]["total_fare"], 45.0);
        assert!(json["itinerary"]["pois"].as_array().unwrap().is_empty());
    }
}

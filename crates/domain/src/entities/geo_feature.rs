//! GeoJSON point features
//!
//! Geometry coordinates follow the GeoJSON convention of
//! `[longitude, latitude]`, the reverse of [`GeoLocation`]'s wire order.

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoLocation;

/// GeoJSON `Feature` discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FeatureType {
    #[default]
    Feature,
}

/// GeoJSON `Point` discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GeometryType {
    #[default]
    Point,
}

/// A GeoJSON point feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoFeature {
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
    pub properties: FeatureProperties,
    pub geometry: PointGeometry,
}

impl GeoFeature {
    /// Create a point feature at a location
    #[must_use]
    pub fn point(
        name: impl Into<String>,
        category: impl Into<String>,
        location: GeoLocation,
    ) -> Self {
        Self {
            feature_type: FeatureType::Feature,
            properties: FeatureProperties {
                name: name.into(),
                category: category.into(),
            },
            geometry: PointGeometry::new(location),
        }
    }
}

/// Properties carried by a feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureProperties {
    pub name: String,
    /// Category label (mine, quarry, ...)
    #[serde(rename = "type")]
    pub category: String,
}

/// GeoJSON point geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub geometry_type: GeometryType,
    /// `[longitude, latitude]`
    pub coordinates: [f64; 2],
}

impl PointGeometry {
    #[must_use]
    pub const fn new(location: GeoLocation) -> Self {
        Self {
            geometry_type: GeometryType::Point,
            coordinates: [location.longitude(), location.latitude()],
        }
    }

    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        GeoLocation::new(self.coordinates[1], self.coordinates[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geojson_shape() {
        let feature = GeoFeature::point("Site", "mine", GeoLocation::new(22.33, 114.1705));
        let json = serde_json::to_value(&feature).unwrap();
        assert_eq!(json["type"], "Feature");
        assert_eq!(json["properties"]["name"], "Site");
        assert_eq!(json["properties"]["type"], "mine");
        assert_eq!(json["geometry"]["type"], "Point");
        assert_eq!(json["geometry"]["coordinates"][0], 114.1705);
        assert_eq!(json["geometry"]["coordinates"][1], 22.33);
    }

    #[test]
    fn test_geometry_location_roundtrip() {
        let loc = GeoLocation::new(22.35, 114.2);
        assert_eq!(PointGeometry::new(loc).location(), loc);
    }

    #[test]
    fn test_rejects_non_point_geometry() {
        let json = r#"{"type":"LineString","coordinates":[1.0,2.0]}"#;
        assert!(serde_json::from_str::<PointGeometry>(json).is_err());
    }
}

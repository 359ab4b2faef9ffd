//! MTR station records for the sample network map

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoLocation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MtrStation {
    pub name: String,
    /// Line code, e.g. `TWL`
    pub line: String,
    pub lat: f64,
    pub lng: f64,
    /// Line colour as a hex string
    pub color: String,
}

impl MtrStation {
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        GeoLocation::new(self.lat, self.lng)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MtrStationList {
    pub stations: Vec<MtrStation>,
}

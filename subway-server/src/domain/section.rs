//! Description of a registered section.

use serde::{Deserialize, Serialize};

use super::{Distance, StationName};

/// The section that a registration just added to a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionResponse {
    pub line_name: String,
    pub up_station_name: String,
    pub down_station_name: String,
    pub distance: u64,
}

impl SectionResponse {
    pub fn new(line_name: &str, up: &StationName, down: &StationName, distance: Distance) -> Self {
        Self {
            line_name: line_name.to_string(),
            up_station_name: up.to_string(),
            down_station_name: down.to_string(),
            distance: distance.get(),
        }
    }
}

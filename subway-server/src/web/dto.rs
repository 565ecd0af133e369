//! Data transfer objects for web requests and responses.
//!
//! Field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::StationId;
use crate::store::{LineId, LineView, StoredStation};

pub use crate::domain::SectionResponse;

/// Request to create a station.
#[derive(Debug, Serialize, Deserialize)]
pub struct StationRequest {
    pub name: String,
}

/// A station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationResponse {
    pub id: StationId,
    pub name: String,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
}

/// Request to create a line between two existing stations.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRequest {
    pub name: String,
    pub color: String,
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: u64,
}

/// Request to rename or recolor a line.
#[derive(Debug, Serialize, Deserialize)]
pub struct LineUpdateRequest {
    pub name: String,
    pub color: String,
}

/// A line with its stations in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineResponse {
    pub id: LineId,
    pub name: String,
    pub color: String,
    pub stations: Vec<StationResponse>,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
}

/// Request to register a section on a line.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRequest {
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: u64,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl StationResponse {
    pub fn from_stored(stored: &StoredStation) -> Self {
        Self {
            id: stored.station.id(),
            name: stored.station.name().to_string(),
            created_date: stored.audit.created_at,
            modified_date: stored.audit.modified_at,
        }
    }
}

impl LineResponse {
    pub fn from_view(view: &LineView) -> Self {
        let stored = &view.line;
        Self {
            id: stored.id,
            name: stored.line.name().to_string(),
            color: stored.line.color().to_string(),
            stations: view.stations.iter().map(StationResponse::from_stored).collect(),
            created_date: stored.audit.created_at,
            modified_date: stored.audit.modified_at,
        }
    }
}

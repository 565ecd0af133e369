//! Store error types.

use crate::domain::{SectionError, StationId, StationName};

use super::LineId;

/// Errors that can occur when reading or changing the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Another station already has this name
    #[error("station {0} already exists")]
    DuplicateStationName(StationName),

    /// Another line already has this name
    #[error("line {0} already exists")]
    DuplicateLineName(String),

    /// No station with this id
    #[error("station {0} not found")]
    StationNotFound(StationId),

    /// No line with this id
    #[error("line {0} not found")]
    LineNotFound(LineId),

    /// Station is still part of a line's path
    #[error("station {station} is on line {line}")]
    StationInUse { station: StationName, line: String },

    /// A line's path names a station the store no longer has
    #[error("line {line} references missing station {station}")]
    MissingStation { line: LineId, station: StationId },

    /// The line rejected the section
    #[error(transparent)]
    Section(#[from] SectionError),
}

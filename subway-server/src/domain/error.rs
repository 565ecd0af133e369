//! Domain error types.
//!
//! These errors represent violated section rules on a line's path. They
//! are raised before any mutation, so a failed call leaves the path as it
//! was.

use super::{Distance, StationName};

/// Errors raised while building or extending a line's path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionError {
    /// Both endpoints of the section already belong to the line
    #[error("stations {up} and {down} are both already on the line")]
    DuplicateStation { up: StationName, down: StationName },

    /// Neither endpoint of the section belongs to the line
    #[error("neither {up} nor {down} is on the line")]
    UnknownAnchor { up: StationName, down: StationName },

    /// The new section does not fit inside the section it splits
    #[error("distance {requested} does not fit inside existing section of {available}")]
    InsufficientDistance {
        requested: Distance,
        available: Distance,
    },

    /// A section cannot start and end at the same station
    #[error("section cannot start and end at {0}")]
    SameStation(StationName),

    /// Terminal stations can only be set once
    #[error("terminal stations are already set")]
    AlreadyInitialized,

    /// Sections can only be registered after terminals are set
    #[error("terminal stations have not been set")]
    NotInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let gangnam = StationName::new("강남역").unwrap();
        let jeongja = StationName::new("정자역").unwrap();

        let err = SectionError::DuplicateStation {
            up: gangnam.clone(),
            down: jeongja.clone(),
        };
        assert_eq!(
            err.to_string(),
            "stations 강남역 and 정자역 are both already on the line"
        );

        let err = SectionError::UnknownAnchor {
            up: gangnam.clone(),
            down: jeongja,
        };
        assert_eq!(err.to_string(), "neither 강남역 nor 정자역 is on the line");

        let err = SectionError::InsufficientDistance {
            requested: Distance::new(30).unwrap(),
            available: Distance::new(30).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "distance 30 does not fit inside existing section of 30"
        );

        let err = SectionError::SameStation(gangnam);
        assert_eq!(err.to_string(), "section cannot start and end at 강남역");

        assert_eq!(
            SectionError::AlreadyInitialized.to_string(),
            "terminal stations are already set"
        );
        assert_eq!(
            SectionError::NotInitialized.to_string(),
            "terminal stations have not been set"
        );
    }
}

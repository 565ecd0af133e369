//! Station identity types.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Error returned when a station name fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStationName {
    reason: &'static str,
}

/// Numeric identifier assigned to a station by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u64);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A station name such as "강남역".
///
/// Names are trimmed and must be non-empty afterwards.
///
/// # Examples
///
/// ```
/// use subway_server::domain::StationName;
///
/// let name = StationName::new("  강남역 ").unwrap();
/// assert_eq!(name.as_str(), "강남역");
///
/// assert!(StationName::new("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationName(String);

impl StationName {
    /// Create a station name, trimming surrounding whitespace.
    pub fn new(s: impl AsRef<str>) -> Result<Self, InvalidStationName> {
        let trimmed = s.as_ref().trim();
        if trimmed.is_empty() {
            return Err(InvalidStationName {
                reason: "station name cannot be blank",
            });
        }
        Ok(StationName(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A subway station.
///
/// Two stations are the same station when their names match; the id is
/// only a storage handle.
#[derive(Debug, Clone)]
pub struct Station {
    id: StationId,
    name: StationName,
}

impl Station {
    pub fn new(id: StationId, name: StationName) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &StationName {
        &self.name
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name, f)
    }
}

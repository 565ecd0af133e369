//! Domain types for subway line management.
//!
//! Stations, lines and the ordered path of stations along a line. Values
//! are validated at construction and line mutations are all-or-nothing,
//! so code holding these types can trust their invariants.

mod distance;
mod error;
mod line;
mod line_stations;
mod section;
mod station;

pub use distance::{Distance, InvalidDistance};
pub use error::SectionError;
pub use line::Line;
pub use line_stations::{LineStation, LineStations, Link, Side};
pub use section::SectionResponse;
pub use station::{InvalidStationName, Station, StationId, StationName};

//! Subway line type.
//!
//! A `Line` owns its path of stations. Terminals are set once, after which
//! sections are registered one at a time. Each registration is classified
//! into a `Placement` first and only then applied, so a rejected section
//! never touches the path.

use tracing::debug;

use super::line_stations::{LineStations, Side};
use super::{Distance, SectionError, SectionResponse, Station, StationName};

/// Where a new station goes relative to the anchor already on the line.
///
/// `side` is the side of the anchor that the new station lands on.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Placement {
    /// Split the section between `anchor` and `neighbour`.
    ///
    /// `near` is the new anchor→station distance, `far` what remains
    /// between the station and `neighbour`.
    InsertInterior {
        side: Side,
        anchor: StationName,
        neighbour: StationName,
        near: Distance,
        far: Distance,
    },
    /// Attach beyond a terminal, making the new station the terminal.
    ExtendTerminal { side: Side, anchor: StationName },
}

/// A subway line.
#[derive(Debug, Clone)]
pub struct Line {
    name: String,
    color: String,
    line_stations: LineStations,
}

impl Line {
    /// Create a line with no stations.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            line_stations: LineStations::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn line_stations(&self) -> &LineStations {
        &self.line_stations
    }

    /// Replace the line's name and color. Stations are untouched.
    pub fn update(&mut self, name: impl Into<String>, color: impl Into<String>) {
        self.name = name.into();
        self.color = color.into();
    }

    /// Set the up and down terminals of an empty line.
    ///
    /// # Errors
    ///
    /// - [`SectionError::AlreadyInitialized`] if the line has stations
    /// - [`SectionError::SameStation`] if `up == down`
    pub fn set_final_stations(
        &mut self,
        up: Station,
        down: Station,
        distance: Distance,
    ) -> Result<(), SectionError> {
        if !self.line_stations.is_empty() {
            return Err(SectionError::AlreadyInitialized);
        }
        if up == down {
            return Err(SectionError::SameStation(up.name().clone()));
        }
        self.line_stations.initialize(up, down, distance);
        Ok(())
    }

    /// Register the section `up`→`down`.
    ///
    /// Exactly one of the two stations must already be on the line. The
    /// other one is spliced in next to it: between the anchor and its
    /// neighbour if the anchor has one on that side, otherwise beyond the
    /// anchor as the new terminal.
    ///
    /// # Errors
    ///
    /// All errors leave the line unchanged.
    ///
    /// - [`SectionError::NotInitialized`] if terminals were never set
    /// - [`SectionError::SameStation`] if `up == down`
    /// - [`SectionError::DuplicateStation`] if both stations are on the line
    /// - [`SectionError::UnknownAnchor`] if neither station is on the line
    /// - [`SectionError::InsufficientDistance`] if the section being split
    ///   is not longer than `distance`
    ///
    /// # Examples
    ///
    /// ```
    /// use subway_server::domain::{Distance, Line, Station, StationId, StationName};
    ///
    /// let station = |id, name: &str| Station::new(StationId(id), StationName::new(name).unwrap());
    /// let mut line = Line::new("신분당선", "bg-red-600");
    /// line.set_final_stations(station(1, "강남역"), station(2, "정자역"), Distance::new(30).unwrap())
    ///     .unwrap();
    ///
    /// let section = line
    ///     .register_section(station(1, "강남역"), station(3, "양재역"), Distance::new(10).unwrap())
    ///     .unwrap();
    /// assert_eq!(section.distance, 10);
    ///
    /// let names: Vec<_> = line.line_stations().stations().iter().map(|s| s.to_string()).collect();
    /// assert_eq!(names, ["강남역", "양재역", "정자역"]);
    /// ```
    pub fn register_section(
        &mut self,
        up: Station,
        down: Station,
        distance: Distance,
    ) -> Result<SectionResponse, SectionError> {
        let placement = self.classify(&up, &down, distance)?;
        let response = SectionResponse::new(&self.name, up.name(), down.name(), distance);
        debug!(line = %self.name, ?placement, "registering section");

        match placement {
            Placement::InsertInterior {
                side,
                anchor,
                neighbour,
                near,
                far,
            } => {
                let station = incoming(side, up, down);
                self.line_stations
                    .insert_between(station, side, &anchor, &neighbour, near, far);
            }
            Placement::ExtendTerminal { side, anchor } => {
                let station = incoming(side, up, down);
                self.line_stations.extend(station, side, &anchor, distance);
            }
        }

        Ok(response)
    }

    fn classify(
        &self,
        up: &Station,
        down: &Station,
        distance: Distance,
    ) -> Result<Placement, SectionError> {
        if self.line_stations.is_empty() {
            return Err(SectionError::NotInitialized);
        }
        if up == down {
            return Err(SectionError::SameStation(up.name().clone()));
        }

        let (anchor, side) = match (
            self.line_stations.get_by_station(up),
            self.line_stations.get_by_station(down),
        ) {
            (Some(_), Some(_)) => {
                return Err(SectionError::DuplicateStation {
                    up: up.name().clone(),
                    down: down.name().clone(),
                });
            }
            (None, None) => {
                return Err(SectionError::UnknownAnchor {
                    up: up.name().clone(),
                    down: down.name().clone(),
                });
            }
            (Some(anchor), None) => (anchor, Side::Down),
            (None, Some(anchor)) => (anchor, Side::Up),
        };

        let anchor_name = anchor.station().name().clone();
        match anchor.link(side) {
            None => Ok(Placement::ExtendTerminal {
                side,
                anchor: anchor_name,
            }),
            Some(link) => {
                let far = link.distance.remainder_after(distance).ok_or(
                    SectionError::InsufficientDistance {
                        requested: distance,
                        available: link.distance,
                    },
                )?;
                Ok(Placement::InsertInterior {
                    side,
                    anchor: anchor_name,
                    neighbour: link.station.clone(),
                    near: distance,
                    far,
                })
            }
        }
    }
}

/// The station of the pair that is not the anchor.
fn incoming(side: Side, up: Station, down: Station) -> Station {
    match side {
        Side::Up => up,
        Side::Down => down,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::StationId;
    use proptest::prelude::*;

    fn station(id: u64, name: String) -> Station {
        Station::new(StationId(id), StationName::new(name).unwrap())
    }

    /// (anchor pick, new station goes down of anchor, distance)
    fn registration() -> impl Strategy<Value = (usize, bool, u64)> {
        (any::<usize>(), any::<bool>(), 1u64..40)
    }

    fn assert_well_formed(path: &LineStations) -> Result<(), TestCaseError> {
        let ordered = path.stations();
        prop_assert_eq!(ordered.len(), path.len());

        let up_terminals = path.iter().filter(|n| n.is_up_terminal()).count();
        let down_terminals = path.iter().filter(|n| n.is_down_terminal()).count();
        prop_assert_eq!(up_terminals, 1);
        prop_assert_eq!(down_terminals, 1);

        for (up, down, distance) in path.sections() {
            let up_node = path.iter().find(|n| n.station().name() == up).unwrap();
            let down_node = path.iter().find(|n| n.station().name() == down).unwrap();
            prop_assert_eq!(up_node.distance_to_next(), Some(distance));
            prop_assert_eq!(down_node.distance_to_previous(), Some(distance));
            prop_assert_eq!(down_node.previous(), Some(up));
        }
        Ok(())
    }

    proptest! {
        /// Accepted registrations keep the path linked end to end; only
        /// terminal extensions change the total distance; rejected ones
        /// change nothing.
        #[test]
        fn registrations_preserve_path(
            initial in 2u64..60,
            ops in proptest::collection::vec(registration(), 0..25),
        ) {
            let mut line = Line::new("신분당선", "bg-red-600");
            line.set_final_stations(
                station(0, "상행종점".into()),
                station(1, "하행종점".into()),
                Distance::new(initial).unwrap(),
            ).unwrap();
            let mut expected_total = initial;

            for (i, (pick, goes_down, dist)) in ops.into_iter().enumerate() {
                let path = line.line_stations();
                let ordered: Vec<Station> = path.stations().into_iter().cloned().collect();
                let anchor = ordered[pick % ordered.len()].clone();
                let side = if goes_down { Side::Down } else { Side::Up };
                let existing = path.get_by_station(&anchor).unwrap().link(side).map(|l| l.distance.get());
                let before = names_and_distances(path);

                let new_station = station(100 + i as u64, format!("역{i}"));
                let distance = Distance::new(dist).unwrap();
                let result = if goes_down {
                    line.register_section(anchor, new_station, distance)
                } else {
                    line.register_section(new_station, anchor, distance)
                };

                match (existing, result) {
                    (None, Ok(_)) => expected_total += dist,
                    (Some(available), Ok(_)) => prop_assert!(dist < available),
                    (Some(available), Err(SectionError::InsufficientDistance { .. })) => {
                        prop_assert!(dist >= available);
                        prop_assert_eq!(&before, &names_and_distances(line.line_stations()));
                    }
                    (_, Err(e)) => prop_assert!(false, "unexpected error: {}", e),
                }

                assert_well_formed(line.line_stations())?;
                prop_assert_eq!(line.line_stations().total_distance(), expected_total);
            }
        }
    }

    fn names_and_distances(path: &LineStations) -> Vec<(String, String, u64)> {
        path.sections()
            .into_iter()
            .map(|(u, d, dist)| (u.to_string(), d.to_string(), dist.get()))
            .collect()
    }
}

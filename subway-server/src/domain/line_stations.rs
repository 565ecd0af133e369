//! The ordered path of stations along a line.
//!
//! Nodes live in an arena keyed by station name. Adjacency is stored as
//! names rather than references, so splicing a station in only rewrites
//! the links of its immediate neighbours.

use std::collections::HashMap;

use super::{Distance, Station, StationName};

/// Direction along a line.
///
/// `Up` points towards the up-terminal (where `previous` leads), `Down`
/// towards the down-terminal (where `next` leads).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Up,
    Down,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Up => Side::Down,
            Side::Down => Side::Up,
        }
    }
}

/// A link to an adjacent station, with the distance to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub station: StationName,
    pub distance: Distance,
}

/// One station's position on a line.
///
/// # Invariants
///
/// - `previous` is `None` iff this is the up-terminal
/// - `next` is `None` iff this is the down-terminal
/// - a distance exists exactly where a link exists
#[derive(Debug, Clone)]
pub struct LineStation {
    station: Station,
    previous: Option<Link>,
    next: Option<Link>,
}

impl LineStation {
    fn new(station: Station) -> Self {
        Self {
            station,
            previous: None,
            next: None,
        }
    }

    pub fn station(&self) -> &Station {
        &self.station
    }

    /// The station towards the up-terminal, if any.
    pub fn previous(&self) -> Option<&StationName> {
        self.previous.as_ref().map(|l| &l.station)
    }

    /// The station towards the down-terminal, if any.
    pub fn next(&self) -> Option<&StationName> {
        self.next.as_ref().map(|l| &l.station)
    }

    pub fn distance_to_previous(&self) -> Option<Distance> {
        self.previous.as_ref().map(|l| l.distance)
    }

    pub fn distance_to_next(&self) -> Option<Distance> {
        self.next.as_ref().map(|l| l.distance)
    }

    pub fn is_up_terminal(&self) -> bool {
        self.previous.is_none()
    }

    pub fn is_down_terminal(&self) -> bool {
        self.next.is_none()
    }

    /// The link on the given side of this station.
    pub fn link(&self, side: Side) -> Option<&Link> {
        match side {
            Side::Up => self.previous.as_ref(),
            Side::Down => self.next.as_ref(),
        }
    }

    fn set_link(&mut self, side: Side, link: Link) {
        match side {
            Side::Up => self.previous = Some(link),
            Side::Down => self.next = Some(link),
        }
    }
}

/// The stations of a line, ordered from up-terminal to down-terminal.
///
/// Empty until the line's terminals are set.
#[derive(Debug, Clone, Default)]
pub struct LineStations {
    nodes: HashMap<StationName, LineStation>,
    up_terminal: Option<StationName>,
    down_terminal: Option<StationName>,
}

impl LineStations {
    /// Look up a station's position on the line.
    ///
    /// Returns `None` if the station is not on the line.
    pub fn get_by_station(&self, station: &Station) -> Option<&LineStation> {
        self.nodes.get(station.name())
    }

    pub fn contains(&self, station: &Station) -> bool {
        self.nodes.contains_key(station.name())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn up_terminal(&self) -> Option<&Station> {
        self.terminal(Side::Up)
    }

    pub fn down_terminal(&self) -> Option<&Station> {
        self.terminal(Side::Down)
    }

    fn terminal(&self, side: Side) -> Option<&Station> {
        let name = match side {
            Side::Up => self.up_terminal.as_ref(),
            Side::Down => self.down_terminal.as_ref(),
        }?;
        self.nodes.get(name).map(LineStation::station)
    }

    /// Walk the line from the up-terminal to the down-terminal.
    ///
    /// The walk is capped at the number of nodes, so it terminates even
    /// if the links were ever corrupted into a cycle.
    pub fn iter(&self) -> impl Iterator<Item = &LineStation> + '_ {
        let first = self.up_terminal.as_ref().and_then(|n| self.nodes.get(n));
        std::iter::successors(first, |node| node.next().and_then(|n| self.nodes.get(n)))
            .take(self.nodes.len())
    }

    /// Stations in line order.
    pub fn stations(&self) -> Vec<&Station> {
        self.iter().map(LineStation::station).collect()
    }

    /// Sections in line order as `(up, down, distance)`.
    pub fn sections(&self) -> Vec<(&StationName, &StationName, Distance)> {
        self.iter()
            .filter_map(|node| {
                node.next
                    .as_ref()
                    .map(|l| (node.station.name(), &l.station, l.distance))
            })
            .collect()
    }

    /// Sum of all section distances, terminal to terminal.
    pub fn total_distance(&self) -> u64 {
        self.iter()
            .filter_map(LineStation::distance_to_next)
            .map(Distance::get)
            .sum()
    }

    /// Set the two terminals. Callers check the path is empty.
    pub(super) fn initialize(&mut self, up: Station, down: Station, distance: Distance) {
        let up_name = up.name().clone();
        let down_name = down.name().clone();

        let mut up_node = LineStation::new(up);
        up_node.set_link(
            Side::Down,
            Link {
                station: down_name.clone(),
                distance,
            },
        );
        let mut down_node = LineStation::new(down);
        down_node.set_link(
            Side::Up,
            Link {
                station: up_name.clone(),
                distance,
            },
        );

        self.nodes.insert(up_name.clone(), up_node);
        self.nodes.insert(down_name.clone(), down_node);
        self.up_terminal = Some(up_name);
        self.down_terminal = Some(down_name);
    }

    /// Splice `station` between `anchor` and its `side` neighbour.
    ///
    /// `near` is anchor→station, `far` is station→neighbour. Callers
    /// check that `near + far` equals the section being split.
    pub(super) fn insert_between(
        &mut self,
        station: Station,
        side: Side,
        anchor: &StationName,
        neighbour: &StationName,
        near: Distance,
        far: Distance,
    ) {
        let name = station.name().clone();
        let mut node = LineStation::new(station);
        node.set_link(
            side.opposite(),
            Link {
                station: anchor.clone(),
                distance: near,
            },
        );
        node.set_link(
            side,
            Link {
                station: neighbour.clone(),
                distance: far,
            },
        );

        if let Some(anchor_node) = self.nodes.get_mut(anchor) {
            anchor_node.set_link(
                side,
                Link {
                    station: name.clone(),
                    distance: near,
                },
            );
        }
        if let Some(neighbour_node) = self.nodes.get_mut(neighbour) {
            neighbour_node.set_link(
                side.opposite(),
                Link {
                    station: name.clone(),
                    distance: far,
                },
            );
        }
        self.nodes.insert(name, node);
    }

    /// Attach `station` beyond the `side` terminal `anchor`, making it
    /// the new terminal on that side.
    pub(super) fn extend(
        &mut self,
        station: Station,
        side: Side,
        anchor: &StationName,
        distance: Distance,
    ) {
        let name = station.name().clone();
        let mut node = LineStation::new(station);
        node.set_link(
            side.opposite(),
            Link {
                station: anchor.clone(),
                distance,
            },
        );

        if let Some(anchor_node) = self.nodes.get_mut(anchor) {
            anchor_node.set_link(
                side,
                Link {
                    station: name.clone(),
                    distance,
                },
            );
        }
        self.nodes.insert(name.clone(), node);
        match side {
            Side::Up => self.up_terminal = Some(name),
            Side::Down => self.down_terminal = Some(name),
        }
    }
}

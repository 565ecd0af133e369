//! Station and line repository.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{Distance, Line, SectionResponse, Station, StationId, StationName};

use super::error::StoreError;

/// Numeric identifier assigned to a line by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub u64);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Creation and last-modification times of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Audit {
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Audit {
    fn now() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            modified_at: now,
        }
    }

    fn touch(&mut self) {
        self.modified_at = Utc::now();
    }
}

/// A station as kept by the store.
#[derive(Debug, Clone)]
pub struct StoredStation {
    pub station: Station,
    pub audit: Audit,
}

/// A line as kept by the store.
#[derive(Debug, Clone)]
pub struct StoredLine {
    pub id: LineId,
    pub line: Line,
    pub audit: Audit,
}

/// A line together with the records of its stations, in line order.
///
/// Both halves are read under the same lock.
#[derive(Debug, Clone)]
pub struct LineView {
    pub line: StoredLine,
    pub stations: Vec<StoredStation>,
}

#[derive(Default)]
struct Tables {
    stations: BTreeMap<StationId, StoredStation>,
    lines: BTreeMap<LineId, StoredLine>,
    last_station_id: u64,
    last_line_id: u64,
}

impl Tables {
    fn station(&self, id: StationId) -> Result<Station, StoreError> {
        self.stations
            .get(&id)
            .map(|s| s.station.clone())
            .ok_or(StoreError::StationNotFound(id))
    }

    fn line_mut(&mut self, id: LineId) -> Result<&mut StoredLine, StoreError> {
        self.lines.get_mut(&id).ok_or(StoreError::LineNotFound(id))
    }

    fn view(&self, stored: &StoredLine) -> Result<LineView, StoreError> {
        let stations = stored
            .line
            .line_stations()
            .stations()
            .into_iter()
            .map(|s| {
                self.stations
                    .get(&s.id())
                    .cloned()
                    .ok_or(StoreError::MissingStation {
                        line: stored.id,
                        station: s.id(),
                    })
            })
            .collect::<Result<_, _>>()?;

        Ok(LineView {
            line: stored.clone(),
            stations,
        })
    }

    fn check_line_name(&self, name: &str, except: Option<LineId>) -> Result<(), StoreError> {
        let taken = self
            .lines
            .values()
            .any(|l| l.line.name() == name && Some(l.id) != except);
        if taken {
            return Err(StoreError::DuplicateLineName(name.to_string()));
        }
        Ok(())
    }
}

/// Thread-safe store of stations and lines.
///
/// Cloning is cheap and every clone sees the same data. Each mutation
/// holds the write lock for its whole duration, so a rejected change
/// leaves nothing half-applied.
#[derive(Clone, Default)]
pub struct SubwayStore {
    inner: Arc<RwLock<Tables>>,
}

impl SubwayStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station with a fresh id.
    pub async fn create_station(&self, name: StationName) -> Result<StoredStation, StoreError> {
        let mut tables = self.inner.write().await;
        if tables.stations.values().any(|s| s.station.name() == &name) {
            return Err(StoreError::DuplicateStationName(name));
        }

        tables.last_station_id += 1;
        let id = StationId(tables.last_station_id);
        let stored = StoredStation {
            station: Station::new(id, name),
            audit: Audit::now(),
        };
        tables.stations.insert(id, stored.clone());
        debug!(%id, name = %stored.station, "created station");
        Ok(stored)
    }

    /// All stations in id order.
    pub async fn list_stations(&self) -> Vec<StoredStation> {
        let tables = self.inner.read().await;
        tables.stations.values().cloned().collect()
    }

    /// Look up a station by id.
    pub async fn find_station(&self, id: StationId) -> Result<StoredStation, StoreError> {
        let tables = self.inner.read().await;
        tables
            .stations
            .get(&id)
            .cloned()
            .ok_or(StoreError::StationNotFound(id))
    }

    /// Remove a station that no line passes through.
    pub async fn delete_station(&self, id: StationId) -> Result<(), StoreError> {
        let mut tables = self.inner.write().await;
        let station = tables.station(id)?;
        if let Some(line) = tables
            .lines
            .values()
            .find(|l| l.line.line_stations().contains(&station))
        {
            return Err(StoreError::StationInUse {
                station: station.name().clone(),
                line: line.line.name().to_string(),
            });
        }

        tables.stations.remove(&id);
        debug!(%id, "deleted station");
        Ok(())
    }

    /// Add a line running between two existing stations.
    pub async fn create_line(
        &self,
        name: String,
        color: String,
        up: StationId,
        down: StationId,
        distance: Distance,
    ) -> Result<LineView, StoreError> {
        let mut tables = self.inner.write().await;
        tables.check_line_name(&name, None)?;
        let up = tables.station(up)?;
        let down = tables.station(down)?;

        let mut line = Line::new(name, color);
        line.set_final_stations(up, down, distance)?;

        tables.last_line_id += 1;
        let id = LineId(tables.last_line_id);
        let stored = StoredLine {
            id,
            line,
            audit: Audit::now(),
        };
        let view = tables.view(&stored)?;
        tables.lines.insert(id, stored);
        debug!(%id, name = view.line.line.name(), "created line");
        Ok(view)
    }

    /// All lines in id order.
    pub async fn list_lines(&self) -> Result<Vec<LineView>, StoreError> {
        let tables = self.inner.read().await;
        tables.lines.values().map(|l| tables.view(l)).collect()
    }

    /// Look up a line by id.
    pub async fn get_line(&self, id: LineId) -> Result<LineView, StoreError> {
        let tables = self.inner.read().await;
        let stored = tables.lines.get(&id).ok_or(StoreError::LineNotFound(id))?;
        tables.view(stored)
    }

    /// Rename and recolor a line.
    pub async fn update_line(
        &self,
        id: LineId,
        name: String,
        color: String,
    ) -> Result<LineView, StoreError> {
        let mut tables = self.inner.write().await;
        if !tables.lines.contains_key(&id) {
            return Err(StoreError::LineNotFound(id));
        }
        tables.check_line_name(&name, Some(id))?;
        let stored = tables.line_mut(id)?;
        stored.line.update(name, color);
        stored.audit.touch();
        let stored = stored.clone();
        debug!(%id, name = stored.line.name(), "updated line");
        tables.view(&stored)
    }

    /// Remove a line.
    pub async fn delete_line(&self, id: LineId) -> Result<(), StoreError> {
        let mut tables = self.inner.write().await;
        tables
            .lines
            .remove(&id)
            .ok_or(StoreError::LineNotFound(id))?;
        debug!(%id, "deleted line");
        Ok(())
    }

    /// Register the section `up`→`down` on a line.
    pub async fn register_section(
        &self,
        line_id: LineId,
        up: StationId,
        down: StationId,
        distance: Distance,
    ) -> Result<SectionResponse, StoreError> {
        let mut tables = self.inner.write().await;
        let up = tables.station(up)?;
        let down = tables.station(down)?;
        let stored = tables.line_mut(line_id)?;

        let response = stored.line.register_section(up, down, distance)?;
        stored.audit.touch();
        Ok(response)
    }
}

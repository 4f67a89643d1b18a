use crate::aircraft::FleetTable;
use crate::airport::AirportTable;
use crate::cargo::{Cargo, CargoId};
use crate::error::TableError;
use crate::flight::{Flight, FlightId};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} '{key}' not found")]
    NotFound { entity: &'static str, key: String },
    #[error("{entity} '{key}' already exists")]
    Duplicate { entity: &'static str, key: String },
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed store document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid reference table: {0}")]
    Table(#[from] TableError),
}

pub type StoreResult<T> = Result<T, StoreError>;

pub const DEFAULT_FLEET: [(&str, i64); 3] =
    [("Boeing 737", 5), ("Airbus A320", 3), ("Boeing 777", 2)];

pub const DEFAULT_AIRPORTS: [(&str, i64); 4] =
    [("Mumbai", 50), ("Delhi", 45), ("Pune", 30), ("Chennai", 40)];

/// Persistent record store behind the planner. Reads hand back owned copies
/// (empty when nothing is stored); table updates replace the whole table.
pub trait Store {
    fn add_flight(&mut self, flight: Flight) -> StoreResult<()>;
    fn add_cargo(&mut self, cargo: Cargo) -> StoreResult<()>;
    fn flights(&self) -> Vec<Flight>;
    fn cargo(&self) -> Vec<Cargo>;
    fn fleet(&self) -> FleetTable;
    fn airports(&self) -> AirportTable;
    fn replace_fleet(&mut self, fleet: FleetTable) -> StoreResult<()>;
    fn replace_airports(&mut self, airports: AirportTable) -> StoreResult<()>;
    /// Replaces both reference tables as one write; on failure neither changes.
    fn replace_tables(&mut self, fleet: FleetTable, airports: AirportTable) -> StoreResult<()>;
    fn delete_flight(&mut self, flight_number: &FlightId) -> StoreResult<()>;
    fn delete_cargo(&mut self, cargo_id: &CargoId) -> StoreResult<()>;

    /// Wipes both reference tables and installs the default fleet and
    /// airports. Running it again discards any edits made in between.
    fn seed_defaults(&mut self) -> StoreResult<()> {
        let fleet = FleetTable::from_entries(DEFAULT_FLEET)?;
        let airports = AirportTable::from_entries(DEFAULT_AIRPORTS)?;
        self.replace_tables(fleet, airports)?;
        info!("Seeded default fleet and airport tables");
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct Document {
    #[serde(default)]
    flights: Vec<Flight>,
    #[serde(default)]
    cargo: Vec<Cargo>,
    #[serde(default)]
    fleet: FleetTable,
    #[serde(default)]
    airports: AirportTable,
}

impl Document {
    fn add_flight(&mut self, flight: Flight) -> StoreResult<()> {
        if self
            .flights
            .iter()
            .any(|f| f.flight_number == flight.flight_number)
        {
            return Err(StoreError::Duplicate {
                entity: "flight",
                key: flight.flight_number.to_string(),
            });
        }
        self.flights.push(flight);
        Ok(())
    }

    fn add_cargo(&mut self, cargo: Cargo) -> StoreResult<()> {
        if self.cargo.iter().any(|c| c.cargo_id == cargo.cargo_id) {
            return Err(StoreError::Duplicate {
                entity: "cargo",
                key: cargo.cargo_id.to_string(),
            });
        }
        self.cargo.push(cargo);
        Ok(())
    }

    fn delete_flight(&mut self, flight_number: &FlightId) -> StoreResult<()> {
        let idx = self
            .flights
            .iter()
            .position(|f| f.flight_number == *flight_number)
            .ok_or_else(|| StoreError::NotFound {
                entity: "flight",
                key: flight_number.to_string(),
            })?;
        self.flights.remove(idx);
        Ok(())
    }

    fn delete_cargo(&mut self, cargo_id: &CargoId) -> StoreResult<()> {
        let idx = self
            .cargo
            .iter()
            .position(|c| c.cargo_id == *cargo_id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "cargo",
                key: cargo_id.to_string(),
            })?;
        self.cargo.remove(idx);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryStore {
    doc: Document,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }
}

impl Store for MemoryStore {
    fn add_flight(&mut self, flight: Flight) -> StoreResult<()> {
        self.doc.add_flight(flight)
    }

    fn add_cargo(&mut self, cargo: Cargo) -> StoreResult<()> {
        self.doc.add_cargo(cargo)
    }

    fn flights(&self) -> Vec<Flight> {
        self.doc.flights.clone()
    }

    fn cargo(&self) -> Vec<Cargo> {
        self.doc.cargo.clone()
    }

    fn fleet(&self) -> FleetTable {
        self.doc.fleet.clone()
    }

    fn airports(&self) -> AirportTable {
        self.doc.airports.clone()
    }

    fn replace_fleet(&mut self, fleet: FleetTable) -> StoreResult<()> {
        self.doc.fleet = fleet;
        Ok(())
    }

    fn replace_airports(&mut self, airports: AirportTable) -> StoreResult<()> {
        self.doc.airports = airports;
        Ok(())
    }

    fn replace_tables(&mut self, fleet: FleetTable, airports: AirportTable) -> StoreResult<()> {
        self.doc.fleet = fleet;
        self.doc.airports = airports;
        Ok(())
    }

    fn delete_flight(&mut self, flight_number: &FlightId) -> StoreResult<()> {
        self.doc.delete_flight(flight_number)
    }

    fn delete_cargo(&mut self, cargo_id: &CargoId) -> StoreResult<()> {
        self.doc.delete_cargo(cargo_id)
    }
}

/// Keeps the whole store as one JSON document on disk. Each mutation is
/// applied to a copy, written out, and only then committed in memory.
pub struct JsonFileStore {
    path: PathBuf,
    doc: Document,
}

impl JsonFileStore {
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let doc = match std::fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "Store file missing, starting empty");
                Document::default()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(JsonFileStore { path, doc })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn commit<F>(&mut self, mutate: F) -> StoreResult<()>
    where
        F: FnOnce(&mut Document) -> StoreResult<()>,
    {
        let mut next = self.doc.clone();
        mutate(&mut next)?;
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&next)?)?;
        debug!(path = %self.path.display(), "Store written");
        self.doc = next;
        Ok(())
    }
}

impl Store for JsonFileStore {
    fn add_flight(&mut self, flight: Flight) -> StoreResult<()> {
        self.commit(|doc| doc.add_flight(flight))
    }

    fn add_cargo(&mut self, cargo: Cargo) -> StoreResult<()> {
        self.commit(|doc| doc.add_cargo(cargo))
    }

    fn flights(&self) -> Vec<Flight> {
        self.doc.flights.clone()
    }

    fn cargo(&self) -> Vec<Cargo> {
        self.doc.cargo.clone()
    }

    fn fleet(&self) -> FleetTable {
        self.doc.fleet.clone()
    }

    fn airports(&self) -> AirportTable {
        self.doc.airports.clone()
    }

    fn replace_fleet(&mut self, fleet: FleetTable) -> StoreResult<()> {
        self.commit(|doc| {
            doc.fleet = fleet;
            Ok(())
        })
    }

    fn replace_airports(&mut self, airports: AirportTable) -> StoreResult<()> {
        self.commit(|doc| {
            doc.airports = airports;
            Ok(())
        })
    }

    fn replace_tables(&mut self, fleet: FleetTable, airports: AirportTable) -> StoreResult<()> {
        self.commit(|doc| {
            doc.fleet = fleet;
            doc.airports = airports;
            Ok(())
        })
    }

    fn delete_flight(&mut self, flight_number: &FlightId) -> StoreResult<()> {
        self.commit(|doc| doc.delete_flight(flight_number))
    }

    fn delete_cargo(&mut self, cargo_id: &CargoId) -> StoreResult<()> {
        self.commit(|doc| doc.delete_cargo(cargo_id))
    }
}

use crate::error::TableError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tabled::Tabled;

pub type AircraftType = Arc<str>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Aircraft {
    pub aircraft_type: AircraftType,
    pub count: u32,
}

/// Aircraft type -> available units, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Aircraft>", into = "Vec<Aircraft>")]
pub struct FleetTable {
    fleet: Vec<Aircraft>,
}

impl FleetTable {
    pub fn from_entries<K, I>(entries: I) -> Result<Self, TableError>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, i64)>,
    {
        let fleet = entries
            .into_iter()
            .map(|(aircraft_type, count)| {
                let aircraft_type = aircraft_type.as_ref();
                u32::try_from(count)
                    .map(|count| Aircraft {
                        aircraft_type: Arc::from(aircraft_type),
                        count,
                    })
                    .map_err(|_| TableError::OutOfRange {
                        key: aircraft_type.to_string(),
                        value: count,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from(fleet)
    }

    pub fn contains(&self, aircraft_type: &str) -> bool {
        self.count(aircraft_type).is_some()
    }

    pub fn count(&self, aircraft_type: &str) -> Option<u32> {
        self.fleet
            .iter()
            .find(|a| &*a.aircraft_type == aircraft_type)
            .map(|a| a.count)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Aircraft> {
        self.fleet.iter()
    }
}

impl TryFrom<Vec<Aircraft>> for FleetTable {
    type Error = TableError;

    fn try_from(fleet: Vec<Aircraft>) -> Result<Self, Self::Error> {
        for (i, aircraft) in fleet.iter().enumerate() {
            if fleet[..i]
                .iter()
                .any(|a| a.aircraft_type == aircraft.aircraft_type)
            {
                return Err(TableError::Duplicate(aircraft.aircraft_type.to_string()));
            }
        }
        Ok(FleetTable { fleet })
    }
}

impl From<FleetTable> for Vec<Aircraft> {
    fn from(table: FleetTable) -> Self {
        table.fleet
    }
}

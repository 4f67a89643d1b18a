use crate::error::TableError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tabled::Tabled;

pub type AirportId = Arc<str>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Airport {
    pub code: AirportId,
    pub capacity: u32,
}

/// Airport code -> capacity, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Airport>", into = "Vec<Airport>")]
pub struct AirportTable {
    airports: Vec<Airport>,
}

impl AirportTable {
    pub fn from_entries<K, I>(entries: I) -> Result<Self, TableError>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, i64)>,
    {
        let airports = entries
            .into_iter()
            .map(|(code, capacity)| {
                let code = code.as_ref();
                u32::try_from(capacity)
                    .map(|capacity| Airport {
                        code: Arc::from(code),
                        capacity,
                    })
                    .map_err(|_| TableError::OutOfRange {
                        key: code.to_string(),
                        value: capacity,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from(airports)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.capacity(code).is_some()
    }

    pub fn capacity(&self, code: &str) -> Option<u32> {
        self.airports
            .iter()
            .find(|a| &*a.code == code)
            .map(|a| a.capacity)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Airport> {
        self.airports.iter()
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

impl TryFrom<Vec<Airport>> for AirportTable {
    type Error = TableError;

    fn try_from(airports: Vec<Airport>) -> Result<Self, Self::Error> {
        for (i, airport) in airports.iter().enumerate() {
            if airports[..i].iter().any(|a| a.code == airport.code) {
                return Err(TableError::Duplicate(airport.code.to_string()));
            }
        }
        Ok(AirportTable { airports })
    }
}

impl From<AirportTable> for Vec<Airport> {
    fn from(table: AirportTable) -> Self {
        table.airports
    }
}

use crate::aircraft::AircraftType;
use crate::airport::AirportId;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tabled::Tabled;

pub type FlightId = Arc<str>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Flight {
    #[tabled(rename = "flight")]
    pub flight_number: FlightId,
    #[tabled(rename = "from")]
    pub departure_airport: AirportId,
    #[tabled(rename = "to")]
    pub arrival_airport: AirportId,
    #[tabled(rename = "departs")]
    pub departure_time: Time,
    #[tabled(rename = "arrives")]
    pub arrival_time: Time,
    #[tabled(rename = "aircraft")]
    pub aircraft_type: AircraftType,
    #[tabled(rename = "seats")]
    pub capacity: u32,
    #[tabled(rename = "cargo (t)")]
    pub cargo_capacity: f64,
}

impl Flight {
    pub fn window(&self) -> (Time, Time) {
        (self.departure_time, self.arrival_time)
    }

    pub fn serves(&self, departure_airport: &AirportId, arrival_airport: &AirportId) -> bool {
        self.departure_airport == *departure_airport && self.arrival_airport == *arrival_airport
    }
}

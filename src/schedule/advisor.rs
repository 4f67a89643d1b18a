use crate::aircraft::{AircraftType, FleetTable};
use crate::flight::{Flight, FlightId};
use crate::schedule::allocation::Allocation;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    /// Flights per available aircraft below which a type counts as idle.
    pub fleet: f64,
    /// Share of cargo capacity below which a flight counts as under-loaded.
    pub cargo: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            fleet: 0.7,
            cargo: 0.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Suggestion {
    IncreaseFleetUtilization {
        aircraft_type: AircraftType,
        flights: usize,
        available: u32,
    },
    LowCargoUtilization {
        flight_number: FlightId,
        loaded: f64,
        cargo_capacity: f64,
    },
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suggestion::IncreaseFleetUtilization { aircraft_type, .. } => write!(
                f,
                "Consider increasing flights for {} to improve fleet utilization",
                aircraft_type
            ),
            Suggestion::LowCargoUtilization { flight_number, .. } => write!(
                f,
                "Flight {} has low cargo capacity utilization",
                flight_number
            ),
        }
    }
}

/// Advisory pass over a schedule and its allocation. Fleet suggestions come
/// first in fleet table order, then cargo suggestions in flight order.
pub fn suggest(
    flights: &[Flight],
    fleet: &FleetTable,
    allocation: &Allocation,
    thresholds: Thresholds,
) -> Vec<Suggestion> {
    let idle_types = fleet.iter().filter_map(|aircraft| {
        let flown = flights
            .iter()
            .filter(|f| f.aircraft_type == aircraft.aircraft_type)
            .count();
        ((flown as f64) < f64::from(aircraft.count) * thresholds.fleet).then(|| {
            Suggestion::IncreaseFleetUtilization {
                aircraft_type: aircraft.aircraft_type.clone(),
                flights: flown,
                available: aircraft.count,
            }
        })
    });

    let underloaded = flights.iter().filter_map(|flight| {
        let loaded = allocation.get(&flight.flight_number)?.weight();
        (loaded < flight.cargo_capacity * thresholds.cargo).then(|| {
            Suggestion::LowCargoUtilization {
                flight_number: flight.flight_number.clone(),
                loaded,
                cargo_capacity: flight.cargo_capacity,
            }
        })
    });

    idle_types.chain(underloaded).collect()
}

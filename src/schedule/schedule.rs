use crate::aircraft::FleetTable;
use crate::airport::AirportTable;
use crate::cargo::Cargo;
use crate::flight::Flight;
use crate::schedule::advisor::{self, Suggestion, Thresholds};
use crate::schedule::allocation::{self, Allocation};
use crate::schedule::feasibility::{self, Rejection};

/// Immutable snapshot of everything the planning passes read: accepted
/// flights and pending cargo in insertion order, plus the reference tables.
/// It is never patched; a mutation produces a fresh one.
#[derive(Clone, Debug, Default)]
pub struct Schedule {
    pub flights: Vec<Flight>,
    pub cargo: Vec<Cargo>,
    pub fleet: FleetTable,
    pub airports: AirportTable,
}

impl Schedule {
    pub fn new(
        flights: Vec<Flight>,
        cargo: Vec<Cargo>,
        fleet: FleetTable,
        airports: AirportTable,
    ) -> Schedule {
        Schedule {
            flights,
            cargo,
            fleet,
            airports,
        }
    }

    pub fn check(&self, candidate: &Flight) -> Result<(), Rejection> {
        feasibility::check(candidate, &self.flights, &self.fleet, &self.airports)
    }

    pub fn allocate(&self) -> Allocation {
        allocation::allocate(&self.flights, &self.cargo)
    }

    pub fn suggest(&self, thresholds: Thresholds) -> Vec<Suggestion> {
        let allocation = self.allocate();
        advisor::suggest(&self.flights, &self.fleet, &allocation, thresholds)
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert!(
            self.flights
                .iter()
                .all(|f| f.departure_time < f.arrival_time),
            "Departure <-> arrival ordering violated"
        );

        assert!(
            self.flights.iter().enumerate().all(|(i, f)| {
                self.flights[..i]
                    .iter()
                    .all(|g| g.flight_number != f.flight_number)
            }),
            "Flight number uniqueness violated"
        );

        assert!(
            self.flights.iter().enumerate().all(|(i, f)| {
                self.flights[..i].iter().all(|g| {
                    g.aircraft_type != f.aircraft_type
                        || !crate::time::Time::is_overlapping(&g.window(), &f.window())
                })
            }),
            "Same aircraft type overlap violated"
        );
    }
}

use crate::cargo::Cargo;
use crate::flight::{Flight, FlightId};
use tracing::debug;

pub struct FlightLoad {
    pub flight_number: FlightId,
    pub cargo: Vec<Cargo>,
}

impl FlightLoad {
    pub fn weight(&self) -> f64 {
        self.cargo.iter().map(|c| c.weight).sum()
    }
}

/// Cargo assigned per flight, one entry per flight in schedule order.
pub struct Allocation {
    pub loads: Vec<FlightLoad>,
}

impl Allocation {
    pub fn get(&self, flight_number: &str) -> Option<&FlightLoad> {
        self.loads.iter().find(|l| &*l.flight_number == flight_number)
    }

    pub fn assigned(&self) -> impl Iterator<Item = (&FlightId, &Cargo)> {
        self.loads
            .iter()
            .flat_map(|l| l.cargo.iter().map(move |c| (&l.flight_number, c)))
    }

    /// Requests from `cargo` that no flight picked up, in input order.
    pub fn unallocated<'a>(&self, cargo: &'a [Cargo]) -> Vec<&'a Cargo> {
        cargo
            .iter()
            .filter(|c| !self.assigned().any(|(_, a)| a.cargo_id == c.cargo_id))
            .collect()
    }
}

/// Greedy first-fit of cargo onto flights.
///
/// Cargo is ranked by priority with ties kept in request order. Each flight,
/// taken in schedule order, scans the ranked requests once and takes every
/// one that still fits, flies its exact route and is due no earlier than the
/// flight lands. Taken cargo is gone for later flights. Nothing is
/// backtracked, so the result is not a knapsack optimum.
pub fn allocate(flights: &[Flight], cargo: &[Cargo]) -> Allocation {
    let mut ranked = cargo.iter().collect::<Vec<&Cargo>>();
    ranked.sort_by_key(|c| c.priority);
    let mut consumed = vec![false; ranked.len()];

    let loads = flights
        .iter()
        .map(|flight| {
            let mut remaining = flight.cargo_capacity;
            let mut load = vec![];
            ranked
                .iter()
                .zip(consumed.iter_mut())
                .filter(|(_, taken)| !**taken)
                .for_each(|(c, taken)| {
                    if flight.serves(&c.departure_airport, &c.arrival_airport)
                        && c.weight <= remaining
                        && c.deadline >= flight.arrival_time
                    {
                        remaining -= c.weight;
                        *taken = true;
                        load.push((*c).clone());
                    }
                });
            debug!(
                flight = %flight.flight_number,
                assigned = load.len(),
                remaining,
                "Cargo loaded"
            );
            FlightLoad {
                flight_number: flight.flight_number.clone(),
                cargo: load,
            }
        })
        .collect();

    Allocation { loads }
}

use crate::aircraft::{AircraftType, FleetTable};
use crate::airport::{AirportId, AirportTable};
use crate::cargo::{Cargo, PRIORITIES, Priority};
use crate::flight::{Flight, FlightId};
use crate::time::Time;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum Rejection {
    #[error("departure {departure} is not before arrival {arrival}")]
    NonPositiveDuration { departure: Time, arrival: Time },
    #[error("aircraft type '{0}' is not in the fleet")]
    UnknownAircraftType(AircraftType),
    #[error("airport '{0}' is not in the airport table")]
    UnknownAirport(AirportId),
    #[error("flight number '{0}' is already scheduled")]
    DuplicateFlightNumber(FlightId),
    #[error("aircraft type '{aircraft_type}' is already flying {conflicting} in that window")]
    AircraftTypeBusy {
        aircraft_type: AircraftType,
        conflicting: FlightId,
    },
    #[error("cargo capacity {0} must be a non-negative number")]
    InvalidCargoCapacity(f64),
    #[error("cargo weight {0} must be a non-negative number")]
    InvalidWeight(f64),
    #[error("cargo priority {0} is outside 1..=5")]
    InvalidPriority(Priority),
}

/// Decides whether `candidate` may join `existing`.
///
/// Checks run in a fixed order and the first failure is reported. Two
/// flights of the same aircraft type conflict when their closed intervals
/// intersect, so a departure at exactly another flight's arrival is rejected.
pub fn check(
    candidate: &Flight,
    existing: &[Flight],
    fleet: &FleetTable,
    airports: &AirportTable,
) -> Result<(), Rejection> {
    if candidate.departure_time >= candidate.arrival_time {
        return Err(Rejection::NonPositiveDuration {
            departure: candidate.departure_time,
            arrival: candidate.arrival_time,
        });
    }

    if !fleet.contains(&candidate.aircraft_type) {
        return Err(Rejection::UnknownAircraftType(
            candidate.aircraft_type.clone(),
        ));
    }

    if let Some(unknown) = [&candidate.departure_airport, &candidate.arrival_airport]
        .into_iter()
        .find(|code| !airports.contains(code))
    {
        return Err(Rejection::UnknownAirport(unknown.clone()));
    }

    if existing
        .iter()
        .any(|f| f.flight_number == candidate.flight_number)
    {
        return Err(Rejection::DuplicateFlightNumber(
            candidate.flight_number.clone(),
        ));
    }

    if let Some(conflict) = existing
        .iter()
        .filter(|f| f.aircraft_type == candidate.aircraft_type)
        .find(|f| Time::is_overlapping(&candidate.window(), &f.window()))
    {
        return Err(Rejection::AircraftTypeBusy {
            aircraft_type: candidate.aircraft_type.clone(),
            conflicting: conflict.flight_number.clone(),
        });
    }

    Ok(())
}

pub fn is_feasible(
    candidate: &Flight,
    existing: &[Flight],
    fleet: &FleetTable,
    airports: &AirportTable,
) -> bool {
    check(candidate, existing, fleet, airports).is_ok()
}

/// Range checks the allocator itself never performs.
pub fn validate_flight(flight: &Flight) -> Result<(), Rejection> {
    if !flight.cargo_capacity.is_finite() || flight.cargo_capacity < 0.0 {
        return Err(Rejection::InvalidCargoCapacity(flight.cargo_capacity));
    }
    Ok(())
}

pub fn validate_cargo(cargo: &Cargo) -> Result<(), Rejection> {
    if !cargo.weight.is_finite() || cargo.weight < 0.0 {
        return Err(Rejection::InvalidWeight(cargo.weight));
    }
    if !PRIORITIES.contains(&cargo.priority) {
        return Err(Rejection::InvalidPriority(cargo.priority));
    }
    Ok(())
}

use crate::aircraft::FleetTable;
use crate::airport::AirportTable;
use crate::cargo::{Cargo, CargoId};
use crate::error::{RosterError, RosterResult};
use crate::flight::{Flight, FlightId};
use crate::schedule::advisor::{Suggestion, Thresholds};
use crate::schedule::allocation::Allocation;
use crate::schedule::feasibility::{self, Rejection};
use crate::schedule::schedule::Schedule;
use crate::store::{Store, StoreError};
use tracing::{info, warn};

/// Front door to the roster. Every write goes to the store first and the
/// schedule snapshot is then rebuilt from the store in full; planning passes
/// only ever read the current snapshot.
pub struct Planner<S: Store> {
    store: S,
    schedule: Schedule,
    thresholds: Thresholds,
}

impl<S: Store> Planner<S> {
    pub fn new(store: S, thresholds: Thresholds) -> Planner<S> {
        let mut planner = Planner {
            store,
            schedule: Schedule::default(),
            thresholds,
        };
        planner.reload();
        planner
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    fn reload(&mut self) {
        self.schedule = Schedule::new(
            self.store.flights(),
            self.store.cargo(),
            self.store.fleet(),
            self.store.airports(),
        );
    }

    fn persist(&mut self, result: Result<(), StoreError>) -> RosterResult<()> {
        let result = result.map_err(RosterError::from);
        if let Err(RosterError::Store(e)) = &result {
            warn!(error = %e, "Store operation failed");
        }
        self.reload();
        result
    }

    /// Dry run of the acceptance test against the current snapshot.
    pub fn check_flight(&self, flight: &Flight) -> Result<(), Rejection> {
        feasibility::validate_flight(flight)?;
        self.schedule.check(flight)
    }

    pub fn add_flight(&mut self, flight: Flight) -> RosterResult<()> {
        if let Err(reason) = self.check_flight(&flight) {
            info!(flight = %flight.flight_number, %reason, "Flight rejected");
            return Err(reason.into());
        }
        let flight_number = flight.flight_number.clone();
        let result = self.store.add_flight(flight);
        self.persist(result)?;
        info!(flight = %flight_number, "Flight accepted");
        Ok(())
    }

    pub fn add_cargo(&mut self, cargo: Cargo) -> RosterResult<()> {
        if let Err(reason) = feasibility::validate_cargo(&cargo) {
            info!(cargo = %cargo.cargo_id, %reason, "Cargo rejected");
            return Err(reason.into());
        }
        let cargo_id = cargo.cargo_id.clone();
        let result = self.store.add_cargo(cargo);
        self.persist(result)?;
        info!(cargo = %cargo_id, "Cargo accepted");
        Ok(())
    }

    pub fn delete_flight(&mut self, flight_number: &FlightId) -> RosterResult<()> {
        let result = self.store.delete_flight(flight_number);
        self.persist(result)?;
        info!(flight = %flight_number, "Flight removed");
        Ok(())
    }

    pub fn delete_cargo(&mut self, cargo_id: &CargoId) -> RosterResult<()> {
        let result = self.store.delete_cargo(cargo_id);
        self.persist(result)?;
        info!(cargo = %cargo_id, "Cargo removed");
        Ok(())
    }

    /// Replaces the fleet table. Accepted flights are not re-validated.
    pub fn update_fleet(&mut self, fleet: FleetTable) -> RosterResult<()> {
        let result = self.store.replace_fleet(fleet);
        self.persist(result)?;
        info!("Fleet table replaced");
        Ok(())
    }

    /// Replaces the airport table. Accepted flights are not re-validated.
    pub fn update_airports(&mut self, airports: AirportTable) -> RosterResult<()> {
        let result = self.store.replace_airports(airports);
        self.persist(result)?;
        info!("Airport table replaced");
        Ok(())
    }

    pub fn seed_defaults(&mut self) -> RosterResult<()> {
        let result = self.store.seed_defaults();
        self.persist(result)
    }

    pub fn allocate(&self) -> Allocation {
        let allocation = self.schedule.allocate();
        info!(
            flights = allocation.loads.len(),
            assigned = allocation.assigned().count(),
            unallocated = allocation.unallocated(&self.schedule.cargo).len(),
            "Cargo allocation computed"
        );
        allocation
    }

    pub fn suggest(&self) -> Vec<Suggestion> {
        self.schedule.suggest(self.thresholds)
    }
}

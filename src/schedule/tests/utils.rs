use crate::aircraft::FleetTable;
use crate::airport::AirportTable;
use crate::cargo::Cargo;
use crate::flight::Flight;
use crate::time::Time;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::sync::Arc;

pub fn id(s: &str) -> Arc<str> {
    Arc::from(s)
}

pub fn flight(
    flight_number: &str,
    departure_airport: &str,
    arrival_airport: &str,
    departure_time: u64,
    arrival_time: u64,
    aircraft_type: &str,
    cargo_capacity: f64,
) -> Flight {
    Flight {
        flight_number: id(flight_number),
        departure_airport: id(departure_airport),
        arrival_airport: id(arrival_airport),
        departure_time: Time(departure_time),
        arrival_time: Time(arrival_time),
        aircraft_type: id(aircraft_type),
        capacity: 180,
        cargo_capacity,
    }
}

pub fn cargo(
    cargo_id: &str,
    weight: f64,
    departure_airport: &str,
    arrival_airport: &str,
    priority: u8,
    deadline: u64,
) -> Cargo {
    Cargo {
        cargo_id: id(cargo_id),
        weight,
        departure_airport: id(departure_airport),
        arrival_airport: id(arrival_airport),
        priority,
        deadline: Time(deadline),
    }
}

pub fn fleet(entries: &[(&str, i64)]) -> FleetTable {
    FleetTable::from_entries(entries.iter().copied()).unwrap()
}

pub fn airports(codes: &[&str]) -> AirportTable {
    AirportTable::from_entries(codes.iter().map(|c| (*c, 10))).unwrap()
}

pub fn arb_id(prefix: &'static str) -> impl Strategy<Value = Arc<str>> {
    prop_oneof![
        Just(Arc::from(format!("{}_1", prefix))),
        Just(Arc::from(format!("{}_2", prefix))),
        Just(Arc::from(format!("{}_3", prefix))),
    ]
}

pub fn arb_flight() -> impl Strategy<Value = Flight> {
    (
        0..1000u32,
        arb_id("AP"),
        arb_id("AP"),
        0..2500u64,
        0..600u64,
        arb_id("AC"),
        0..40u32,
    )
        .prop_map(|(n, org, dst, dep, dur, ac, cap)| Flight {
            flight_number: id(&format!("FL_{}", n)),
            departure_airport: org,
            arrival_airport: dst,
            departure_time: Time(dep),
            arrival_time: Time(dep) + dur,
            aircraft_type: ac,
            capacity: 180,
            cargo_capacity: f64::from(cap),
        })
}

pub fn arb_cargo() -> impl Strategy<Value = Cargo> {
    (
        0..1000u32,
        0..25u32,
        arb_id("AP"),
        arb_id("AP"),
        1..=5u8,
        0..3500u64,
    )
        .prop_map(|(n, weight, org, dst, priority, deadline)| Cargo {
            cargo_id: id(&format!("CG_{}", n)),
            weight: f64::from(weight),
            departure_airport: org,
            arrival_airport: dst,
            priority,
            deadline: Time(deadline),
        })
}

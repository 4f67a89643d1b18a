use crate::airport::AirportId;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tabled::Tabled;

pub type CargoId = Arc<str>;

/// 1 is the most urgent, 5 the least.
pub type Priority = u8;

pub const PRIORITIES: std::ops::RangeInclusive<Priority> = 1..=5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Cargo {
    #[tabled(rename = "cargo")]
    pub cargo_id: CargoId,
    #[tabled(rename = "weight (t)")]
    pub weight: f64,
    #[tabled(rename = "from")]
    pub departure_airport: AirportId,
    #[tabled(rename = "to")]
    pub arrival_airport: AirportId,
    pub priority: Priority,
    pub deadline: Time,
}

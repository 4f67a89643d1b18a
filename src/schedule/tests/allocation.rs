use crate::schedule::allocation::allocate;
use crate::schedule::tests::utils::{cargo, flight, id};

const DAY: u64 = 1440;

fn assigned_ids(allocation: &crate::schedule::allocation::Allocation, flight: &str) -> Vec<String> {
    allocation
        .get(flight)
        .map(|l| l.cargo.iter().map(|c| c.cargo_id.to_string()).collect())
        .unwrap_or_default()
}

#[test]
fn test_higher_priority_blocks_larger_fit() {
    let flights = vec![flight("F1", "BOM", "DEL", 480, 600, "X", 10.0)];
    let requests = vec![
        cargo("C1", 4.0, "BOM", "DEL", 1, 480 + DAY),
        cargo("C2", 7.0, "BOM", "DEL", 2, 480 + DAY),
    ];

    let allocation = allocate(&flights, &requests);

    assert_eq!(vec!["C1"], assigned_ids(&allocation, "F1"));
    let leftover: Vec<_> = allocation
        .unallocated(&requests)
        .iter()
        .map(|c| c.cargo_id.clone())
        .collect();
    assert_eq!(vec![id("C2")], leftover);
}

#[test]
fn test_priority_order_not_request_order() {
    let flights = vec![flight("F1", "BOM", "DEL", 480, 600, "X", 10.0)];
    let requests = vec![
        cargo("C1", 7.0, "BOM", "DEL", 3, DAY),
        cargo("C2", 4.0, "BOM", "DEL", 1, DAY),
        cargo("C3", 5.0, "BOM", "DEL", 2, DAY),
    ];

    let allocation = allocate(&flights, &requests);

    assert_eq!(vec!["C2", "C3"], assigned_ids(&allocation, "F1"));
}

#[test]
fn test_equal_priority_keeps_request_order() {
    let flights = vec![flight("F1", "BOM", "DEL", 480, 600, "X", 5.0)];
    let requests = vec![
        cargo("C1", 3.0, "BOM", "DEL", 2, DAY),
        cargo("C2", 3.0, "BOM", "DEL", 2, DAY),
        cargo("C3", 2.0, "BOM", "DEL", 2, DAY),
    ];

    let allocation = allocate(&flights, &requests);

    assert_eq!(vec!["C1", "C3"], assigned_ids(&allocation, "F1"));
}

#[test]
fn test_route_must_match_exactly() {
    let flights = vec![flight("F1", "BOM", "DEL", 480, 600, "X", 10.0)];
    let requests = vec![
        cargo("C1", 1.0, "DEL", "BOM", 1, DAY),
        cargo("C2", 1.0, "BOM", "PNQ", 1, DAY),
        cargo("C3", 1.0, "PNQ", "DEL", 1, DAY),
    ];

    let allocation = allocate(&flights, &requests);

    assert!(assigned_ids(&allocation, "F1").is_empty());
    assert_eq!(3, allocation.unallocated(&requests).len());
}

#[test]
fn test_deadline_against_arrival() {
    let flights = vec![flight("F1", "BOM", "DEL", 480, 600, "X", 10.0)];
    let requests = vec![
        cargo("C1", 1.0, "BOM", "DEL", 1, 599),
        cargo("C2", 1.0, "BOM", "DEL", 1, 600),
    ];

    let allocation = allocate(&flights, &requests);

    assert_eq!(vec!["C2"], assigned_ids(&allocation, "F1"));
}

#[test]
fn test_earlier_flight_consumes_cargo() {
    let flights = vec![
        flight("F1", "BOM", "DEL", 480, 600, "X", 10.0),
        flight("F2", "BOM", "DEL", 700, 820, "Y", 10.0),
    ];
    let requests = vec![
        cargo("C1", 6.0, "BOM", "DEL", 1, DAY),
        cargo("C2", 6.0, "BOM", "DEL", 1, DAY),
    ];

    let allocation = allocate(&flights, &requests);

    assert_eq!(vec!["C1"], assigned_ids(&allocation, "F1"));
    assert_eq!(vec!["C2"], assigned_ids(&allocation, "F2"));
}

#[test]
fn test_flights_keep_schedule_order() {
    // the later flight is listed first and gets first pick
    let flights = vec![
        flight("LATE", "BOM", "DEL", 900, 1000, "X", 5.0),
        flight("EARLY", "BOM", "DEL", 100, 200, "Y", 5.0),
    ];
    let requests = vec![cargo("C1", 5.0, "BOM", "DEL", 1, DAY)];

    let allocation = allocate(&flights, &requests);

    let order: Vec<_> = allocation
        .loads
        .iter()
        .map(|l| l.flight_number.to_string())
        .collect();
    assert_eq!(vec!["LATE", "EARLY"], order);
    assert_eq!(vec!["C1"], assigned_ids(&allocation, "LATE"));
    assert!(assigned_ids(&allocation, "EARLY").is_empty());
}

#[test]
fn test_no_retry_on_earlier_flight() {
    // F2 cannot take C1 (deadline), and F1 already ran its pass when C1 was blocked by C0
    let flights = vec![
        flight("F1", "BOM", "DEL", 480, 600, "X", 5.0),
        flight("F2", "BOM", "DEL", 2000, 2100, "Y", 50.0),
    ];
    let requests = vec![
        cargo("C0", 5.0, "BOM", "DEL", 1, 3000),
        cargo("C1", 3.0, "BOM", "DEL", 2, 700),
    ];

    let allocation = allocate(&flights, &requests);

    assert_eq!(vec!["C0"], assigned_ids(&allocation, "F1"));
    assert!(assigned_ids(&allocation, "F2").is_empty());
    assert_eq!(1, allocation.unallocated(&requests).len());
}

#[test]
fn test_exact_fill_and_zero_weight() {
    let flights = vec![flight("F1", "BOM", "DEL", 480, 600, "X", 10.0)];
    let requests = vec![
        cargo("C1", 10.0, "BOM", "DEL", 1, DAY),
        cargo("C2", 0.0, "BOM", "DEL", 5, DAY),
    ];

    let allocation = allocate(&flights, &requests);

    assert_eq!(vec!["C1", "C2"], assigned_ids(&allocation, "F1"));
    assert_eq!(Some(10.0), allocation.get("F1").map(|l| l.weight()));
}

#[test]
fn test_every_flight_listed() {
    let flights = vec![
        flight("F1", "BOM", "DEL", 480, 600, "X", 10.0),
        flight("F2", "DEL", "BOM", 700, 820, "X", 10.0),
    ];

    let allocation = allocate(&flights, &[]);

    assert_eq!(2, allocation.loads.len());
    assert!(allocation.loads.iter().all(|l| l.cargo.is_empty()));
    assert_eq!(0, allocation.assigned().count());
}

#[test]
fn test_allocate_is_idempotent() {
    let flights = vec![
        flight("F1", "BOM", "DEL", 480, 600, "X", 10.0),
        flight("F2", "BOM", "DEL", 700, 820, "Y", 8.0),
    ];
    let requests = vec![
        cargo("C1", 4.0, "BOM", "DEL", 3, DAY),
        cargo("C2", 7.0, "BOM", "DEL", 2, DAY),
        cargo("C3", 2.0, "BOM", "DEL", 1, DAY),
    ];

    let first = allocate(&flights, &requests);
    let second = allocate(&flights, &requests);

    let flatten = |a: &crate::schedule::allocation::Allocation| {
        a.assigned()
            .map(|(f, c)| (f.to_string(), c.cargo_id.to_string()))
            .collect::<Vec<_>>()
    };
    assert_eq!(flatten(&first), flatten(&second));
    assert_eq!(vec!["C3", "C2"], assigned_ids(&first, "F1"));
    assert_eq!(vec!["C1"], assigned_ids(&first, "F2"));
}

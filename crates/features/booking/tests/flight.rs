use avia_booking::{BookingError, Flight, Passenger};

fn flight() -> Flight {
    Flight::new("AB123", 50).expect("valid flight")
}

fn passenger(id: &str) -> Passenger {
    Passenger::new(id, "John Doe", "US").expect("valid passenger")
}

#[test]
fn exposes_flight_number_and_capacity() {
    let flight = flight();
    assert_eq!(flight.flight_number().as_str(), "AB123");
    assert_eq!(flight.seats(), 50);
    assert_eq!(flight.number_of_passengers(), 0);
    assert_eq!(flight.available_seats(), 50);
    assert!(!flight.is_full());
}

#[test]
fn accepts_valid_flight_numbers() {
    for raw in ["AB123", "XY1234"] {
        assert!(Flight::new(raw, 10).is_ok(), "{raw} should be accepted");
    }
}

#[test]
fn rejects_invalid_flight_numbers() {
    for raw in ["InvalidNumber", "A1234", "ab123", "AB12", "AB12345"] {
        let err = Flight::new(raw, 100).expect_err(raw);
        assert!(matches!(err, BookingError::InvalidFormat { ref value, .. } if value == raw));
    }
}

#[test]
fn add_passenger_sets_back_reference() {
    let flight = flight();
    let p = passenger("ID123");

    assert!(flight.add_passenger(&p).unwrap());
    assert_eq!(flight.number_of_passengers(), 1);
    assert_eq!(p.flight(), Some(flight.clone()));
    assert!(flight.contains(&p));
}

#[test]
fn adding_twice_is_not_an_error() {
    let flight = flight();
    let p = passenger("ID123");

    assert!(flight.add_passenger(&p).unwrap());
    assert!(!flight.add_passenger(&p).unwrap());
    assert_eq!(flight.number_of_passengers(), 1);
}

#[test]
fn membership_is_by_identity() {
    let flight = flight();
    let first = passenger("ID123");
    let twin = passenger("ID123");

    flight.add_passenger(&first).unwrap();
    assert!(flight.add_passenger(&twin).unwrap());
    assert_eq!(flight.number_of_passengers(), 2);
    assert!(flight.contains(&first));
}

#[test]
fn remove_passenger_clears_back_reference() {
    let flight = flight();
    let p = passenger("ID123");
    flight.add_passenger(&p).unwrap();

    assert!(flight.remove_passenger(&p));
    assert_eq!(flight.number_of_passengers(), 0);
    assert!(p.flight().is_none());
}

#[test]
fn removing_absent_passenger_still_clears_its_reference() {
    let flight = flight();
    let other = Flight::new("CD456", 50).unwrap();
    let p = passenger("ID123");
    other.add_passenger(&p).unwrap();

    assert!(!flight.remove_passenger(&p));
    assert_eq!(flight.number_of_passengers(), 0);
    assert!(p.flight().is_none());
    assert!(other.contains(&p), "the other flight's set is untouched");
}

#[test]
fn capacity_is_enforced() {
    let small = Flight::new("XY456", 1).unwrap();
    let a = passenger("A");
    let b = passenger("B");

    assert!(small.add_passenger(&a).unwrap());
    let err = small.add_passenger(&b).unwrap_err();

    assert!(matches!(err, BookingError::CapacityExceeded { ref flight_number, seats: 1, .. } if flight_number.as_str() == "XY456"));
    assert!(err.to_string().contains("XY456"));
    assert_eq!(small.number_of_passengers(), 1);
    assert!(b.flight().is_none(), "a rejected passenger is not touched");
    assert!(small.is_full());
    assert_eq!(small.available_seats(), 0);
}

#[test]
fn full_flight_rejects_even_its_own_passenger() {
    let full = Flight::new("XY456", 2).unwrap();
    let a = passenger("A");
    full.add_passenger(&a).unwrap();
    full.add_passenger(&passenger("B")).unwrap();

    assert!(matches!(full.add_passenger(&a), Err(BookingError::CapacityExceeded { .. })));
    assert_eq!(full.number_of_passengers(), 2);
}

#[test]
fn zero_seat_flight_cannot_be_boarded() {
    let ghost = Flight::new("ZZ0000", 0).unwrap();
    assert!(ghost.is_full());
    assert!(ghost.add_passenger(&passenger("A")).is_err());
}

#[test]
fn passengers_snapshot_lists_members() {
    let flight = flight();
    let a = passenger("A");
    let b = passenger("B");
    flight.add_passenger(&a).unwrap();
    flight.add_passenger(&b).unwrap();

    let mut ids: Vec<String> = flight.passengers().iter().map(|p| p.identifier().to_owned()).collect();
    ids.sort();
    assert_eq!(ids, ["A", "B"]);
}

#[test]
fn handles_compare_by_identity() {
    let a = flight();
    let b = flight();
    assert_eq!(a, a.clone());
    assert_ne!(a, b);
    assert_eq!(a.to_string(), "Flight AB123 (50 seats)");
}

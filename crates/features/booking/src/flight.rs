use crate::error::BookingError;
use crate::passenger::Passenger;
use avia_domain::FlightNumber;
use fxhash::FxHashSet;
use parking_lot::Mutex;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Weak};
use tracing::{debug, warn};

pub(crate) struct FlightInner {
    flight_number: FlightNumber,
    seats: u32,
    passengers: Mutex<FxHashSet<Passenger>>,
}

/// A flight with a fixed number of seats.
///
/// `Flight` is a shared handle: clones refer to the same flight, and equality is identity.
/// The flight keeps its passengers alive; passengers only hold a weak back-reference.
#[derive(Clone)]
pub struct Flight {
    inner: Arc<FlightInner>,
}

impl Flight {
    /// Creates an empty flight.
    ///
    /// `seats` is taken as given; a flight with zero seats can never be boarded.
    ///
    /// # Errors
    /// Returns [`BookingError::InvalidFormat`] if `flight_number` is not two uppercase letters
    /// followed by 3-4 digits.
    pub fn new(flight_number: impl Into<String>, seats: u32) -> Result<Self, BookingError> {
        let flight_number = FlightNumber::parse(flight_number)?;
        debug!(flight = %flight_number, seats, "Flight created");

        Ok(Self {
            inner: Arc::new(FlightInner {
                flight_number,
                seats,
                passengers: Mutex::new(FxHashSet::default()),
            }),
        })
    }

    pub(crate) const fn from_inner(inner: Arc<FlightInner>) -> Self {
        Self { inner }
    }

    pub(crate) fn downgrade(&self) -> Weak<FlightInner> {
        Arc::downgrade(&self.inner)
    }

    #[must_use]
    pub fn flight_number(&self) -> &FlightNumber {
        &self.inner.flight_number
    }

    #[must_use]
    pub fn seats(&self) -> u32 {
        self.inner.seats
    }

    #[must_use]
    pub fn number_of_passengers(&self) -> usize {
        self.inner.passengers.lock().len()
    }

    #[must_use]
    pub fn available_seats(&self) -> u32 {
        let taken = u32::try_from(self.number_of_passengers()).unwrap_or(u32::MAX);
        self.inner.seats.saturating_sub(taken)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.number_of_passengers() >= self.capacity()
    }

    /// Whether this exact passenger (not merely one with the same identifier) is on board.
    #[must_use]
    pub fn contains(&self, passenger: &Passenger) -> bool {
        self.inner.passengers.lock().contains(passenger)
    }

    /// Snapshot of the passengers on board, in no particular order.
    #[must_use]
    pub fn passengers(&self) -> Vec<Passenger> {
        self.inner.passengers.lock().iter().cloned().collect()
    }

    /// Boards `passenger` and points its back-reference at this flight.
    ///
    /// Returns `false` if the passenger was already on board; the back-reference is still
    /// (re)written in that case.
    ///
    /// # Errors
    /// Returns [`BookingError::CapacityExceeded`] when every seat is taken, even if `passenger`
    /// is one of the occupants. Nothing is modified on error.
    pub fn add_passenger(&self, passenger: &Passenger) -> Result<bool, BookingError> {
        let mut passengers = self.inner.passengers.lock();
        if passengers.len() >= self.capacity() {
            warn!(
                flight = %self.inner.flight_number,
                passenger = passenger.identifier(),
                seats = self.inner.seats,
                "Flight is full"
            );
            return Err(BookingError::CapacityExceeded {
                flight_number: self.inner.flight_number.clone(),
                seats: self.inner.seats,
                context: None,
            });
        }

        passenger.set_flight(Some(self));
        let inserted = passengers.insert(passenger.clone());
        debug!(flight = %self.inner.flight_number, passenger = passenger.identifier(), inserted, "Passenger added");

        Ok(inserted)
    }

    /// Clears the passenger's back-reference, then takes it off this flight.
    ///
    /// The back-reference is cleared even when the passenger was not on board (including when
    /// it pointed at another flight). Returns whether the passenger was on board.
    pub fn remove_passenger(&self, passenger: &Passenger) -> bool {
        let mut passengers = self.inner.passengers.lock();
        passenger.set_flight(None);
        let removed = passengers.remove(passenger);
        debug!(flight = %self.inner.flight_number, passenger = passenger.identifier(), removed, "Passenger removed");

        removed
    }

    fn capacity(&self) -> usize {
        usize::try_from(self.inner.seats).unwrap_or(usize::MAX)
    }
}

impl PartialEq for Flight {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Flight {}

impl Hash for Flight {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.inner), state);
    }
}

impl fmt::Debug for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flight")
            .field("flight_number", &self.inner.flight_number)
            .field("seats", &self.inner.seats)
            .field("passengers", &self.number_of_passengers())
            .finish()
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Flight {} ({} seats)", self.inner.flight_number, self.inner.seats)
    }
}

use crate::error::BookingError;
use crate::flight::{Flight, FlightInner};
use avia_domain::{CountryCode, JoinMode};
use parking_lot::RwLock;
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Weak};
use tracing::{debug, warn};

pub(crate) struct PassengerInner {
    identifier: String,
    name: String,
    country_code: CountryCode,
    join_mode: JoinMode,
    flight: RwLock<Weak<FlightInner>>,
}

/// A passenger, assigned to at most one flight at a time.
///
/// Like [`Flight`], this is a shared handle compared by identity. Two passengers with the same
/// identifier are still two different passengers.
#[derive(Clone)]
pub struct Passenger {
    inner: Arc<PassengerInner>,
}

impl Passenger {
    /// Creates an unassigned passenger that moves between flights with [`JoinMode::Sequential`].
    ///
    /// # Errors
    /// Returns [`BookingError::InvalidCountryCode`] if `country_code` is not an ISO 3166-1
    /// alpha-2 code.
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        country_code: &str,
    ) -> Result<Self, BookingError> {
        Self::with_join_mode(identifier, name, country_code, JoinMode::default())
    }

    /// Creates an unassigned passenger whose [`Passenger::join_flight`] uses `join_mode`.
    ///
    /// # Errors
    /// Returns [`BookingError::InvalidCountryCode`] if `country_code` is not an ISO 3166-1
    /// alpha-2 code.
    pub fn with_join_mode(
        identifier: impl Into<String>,
        name: impl Into<String>,
        country_code: &str,
        join_mode: JoinMode,
    ) -> Result<Self, BookingError> {
        let country_code = CountryCode::parse(country_code)?;
        let identifier = identifier.into();
        debug!(passenger = %identifier, country = %country_code, %join_mode, "Passenger created");

        Ok(Self {
            inner: Arc::new(PassengerInner {
                identifier,
                name: name.into(),
                country_code,
                join_mode,
                flight: RwLock::new(Weak::new()),
            }),
        })
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.inner.identifier
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    #[must_use]
    pub fn country_code(&self) -> CountryCode {
        self.inner.country_code
    }

    #[must_use]
    pub fn join_mode(&self) -> JoinMode {
        self.inner.join_mode
    }

    /// The flight this passenger currently points at.
    ///
    /// `None` when unassigned, or when every handle to the flight has been dropped.
    #[must_use]
    pub fn flight(&self) -> Option<Flight> {
        self.inner.flight.read().upgrade().map(Flight::from_inner)
    }

    /// Overwrites the back-reference without touching any passenger set.
    pub(crate) fn set_flight(&self, flight: Option<&Flight>) {
        *self.inner.flight.write() = flight.map_or_else(Weak::new, Flight::downgrade);
    }

    /// Moves this passenger to `flight`, or off any flight when `None`, using the passenger's
    /// own [`JoinMode`].
    ///
    /// # Errors
    /// See [`Passenger::join_flight_with`].
    pub fn join_flight(&self, flight: Option<&Flight>) -> Result<(), BookingError> {
        self.join_flight_with(self.inner.join_mode, flight)
    }

    /// Moves this passenger to `flight`, or off any flight when `None`.
    ///
    /// With [`JoinMode::Sequential`] the passenger leaves its current flight, its
    /// back-reference is set to `flight`, and only then is it added to `flight`. A failure in
    /// the last step is not rolled back: the passenger is off its old flight and its
    /// back-reference points at `flight` without being on board. Callers should re-check
    /// [`Passenger::flight`] after an error.
    ///
    /// With [`JoinMode::Atomic`] every precondition is checked before anything changes, so an
    /// error leaves both flights and the back-reference untouched.
    ///
    /// # Errors
    /// * [`BookingError::RelationshipInconsistency`] if the current flight does not list this
    ///   passenger, or `flight` could not take it (sequential mode reports a full flight this way).
    /// * [`BookingError::CapacityExceeded`] in atomic mode when `flight` is full.
    pub fn join_flight_with(&self, mode: JoinMode, flight: Option<&Flight>) -> Result<(), BookingError> {
        let previous = self.flight();

        if mode == JoinMode::Atomic {
            self.check_transfer(previous.as_ref(), flight)?;
        }

        if let Some(previous) = &previous
            && !previous.remove_passenger(self)
        {
            return Err(self.inconsistency(format!("not listed on flight {}", previous.flight_number())));
        }

        self.set_flight(flight);

        if let Some(next) = flight {
            match next.add_passenger(self) {
                Ok(true) => {},
                Ok(false) => {
                    return Err(self.inconsistency(format!("already listed on flight {}", next.flight_number())));
                },
                Err(err) => {
                    return Err(self.inconsistency(format!("cannot board flight {}: {err}", next.flight_number())));
                },
            }
        }

        debug!(
            passenger = %self.inner.identifier,
            from = previous.as_ref().map(|f| f.flight_number().as_str()),
            to = flight.map(|f| f.flight_number().as_str()),
            %mode,
            "Passenger changed flight"
        );

        Ok(())
    }

    /// Verifies that moving from `previous` to `next` cannot fail half-way.
    fn check_transfer(&self, previous: Option<&Flight>, next: Option<&Flight>) -> Result<(), BookingError> {
        if let Some(previous) = previous
            && !previous.contains(self)
        {
            return Err(self.inconsistency(format!("not listed on flight {}", previous.flight_number())));
        }

        let Some(next) = next else {
            return Ok(());
        };
        if previous == Some(next) {
            return Ok(());
        }

        if next.contains(self) {
            return Err(self.inconsistency(format!("already listed on flight {}", next.flight_number())));
        }
        if next.is_full() {
            warn!(passenger = %self.inner.identifier, flight = %next.flight_number(), "Transfer rejected, flight is full");
            return Err(BookingError::CapacityExceeded {
                flight_number: next.flight_number().clone(),
                seats: next.seats(),
                context: Some(Cow::Owned(format!("Moving passenger {}", self.inner.identifier))),
            });
        }

        Ok(())
    }

    fn inconsistency(&self, reason: String) -> BookingError {
        warn!(passenger = %self.inner.identifier, %reason, "Passenger relationship out of sync");
        BookingError::RelationshipInconsistency {
            message: format!("passenger {} {reason}", self.inner.identifier).into(),
            context: None,
        }
    }
}

impl PartialEq for Passenger {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Passenger {}

impl Hash for Passenger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.inner), state);
    }
}

impl fmt::Debug for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flight = self.flight();
        f.debug_struct("Passenger")
            .field("identifier", &self.inner.identifier)
            .field("name", &self.inner.name)
            .field("country_code", &self.inner.country_code)
            .field("flight", &flight.as_ref().map(Flight::flight_number))
            .finish()
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Passenger {} with identifier: {} from {}",
            self.inner.name, self.inner.identifier, self.inner.country_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passenger(id: &str) -> Passenger {
        Passenger::new(id, "John Doe", "US").unwrap()
    }

    #[test]
    fn set_flight_only_touches_the_back_reference() {
        let flight = Flight::new("AB123", 50).unwrap();
        let p = passenger("ID123");

        p.set_flight(Some(&flight));

        assert_eq!(p.flight(), Some(flight.clone()));
        assert_eq!(flight.number_of_passengers(), 0);

        p.set_flight(None);
        assert!(p.flight().is_none());
    }

    #[test]
    fn sequential_join_fails_when_previous_flight_does_not_list_passenger() {
        let stale = Flight::new("AB123", 50).unwrap();
        let next = Flight::new("CD456", 50).unwrap();
        let p = passenger("ID123");
        p.set_flight(Some(&stale));

        let err = p.join_flight(Some(&next)).unwrap_err();

        assert!(matches!(err, BookingError::RelationshipInconsistency { .. }));
        assert!(p.flight().is_none(), "remove_passenger clears the back-reference before failing");
        assert_eq!(next.number_of_passengers(), 0);
    }

    #[test]
    fn atomic_join_leaves_stale_reference_alone() {
        let stale = Flight::new("AB123", 50).unwrap();
        let next = Flight::new("CD456", 50).unwrap();
        let p = passenger("ID123");
        p.set_flight(Some(&stale));

        let err = p.join_flight_with(JoinMode::Atomic, Some(&next)).unwrap_err();

        assert!(matches!(err, BookingError::RelationshipInconsistency { .. }));
        assert_eq!(p.flight(), Some(stale));
        assert_eq!(next.number_of_passengers(), 0);
    }

    #[test]
    fn join_reports_passenger_already_listed_on_target() {
        let flight = Flight::new("AB123", 50).unwrap();
        let p = passenger("ID123");
        flight.add_passenger(&p).unwrap();
        p.set_flight(None);

        let err = p.join_flight(Some(&flight)).unwrap_err();

        assert!(matches!(err, BookingError::RelationshipInconsistency { .. }));
        assert_eq!(flight.number_of_passengers(), 1);
        assert_eq!(p.flight(), Some(flight));
    }

    #[test]
    fn dropped_flight_reads_as_unassigned() {
        let p = passenger("ID123");
        {
            let flight = Flight::new("AB123", 50).unwrap();
            p.set_flight(Some(&flight));
        }
        assert!(p.flight().is_none());
        assert!(p.join_flight(None).is_ok());
    }
}

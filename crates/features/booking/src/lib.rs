//! # Booking
//!
//! Flights with a fixed number of seats, and passengers assigned to at most one flight.
//!
//! The relationship is kept on both sides: a [`Flight`] holds its passengers, and each
//! [`Passenger`] holds a weak back-reference to its flight. The public operations keep the two
//! sides consistent:
//!
//! * [`Flight::add_passenger`] / [`Flight::remove_passenger`] edit one flight and the
//!   passenger's back-reference.
//! * [`Passenger::join_flight`] moves a passenger between flights (or off any flight with
//!   `None`), either step by step or, with [`JoinMode::Atomic`], after validating everything
//!   up front.
//!
//! ```rust
//! use avia_booking::{Flight, Passenger};
//!
//! let morning = Flight::new("AB123", 50)?;
//! let evening = Flight::new("CD456", 50)?;
//! let passenger = Passenger::new("ID123", "John Doe", "US")?;
//!
//! passenger.join_flight(Some(&morning))?;
//! passenger.join_flight(Some(&evening))?;
//!
//! assert_eq!(morning.number_of_passengers(), 0);
//! assert_eq!(passenger.flight(), Some(evening));
//! # Ok::<(), avia_booking::BookingError>(())
//! ```
//!
//! Handles are `Send + Sync`, but a join is several steps and is not isolated from other
//! threads mutating the same flights.

mod error;
mod flight;
mod passenger;

pub use crate::error::{BookingError, BookingErrorExt};
pub use crate::flight::Flight;
pub use crate::passenger::Passenger;
pub use avia_domain::{CountryCode, FlightNumber, JoinMode};

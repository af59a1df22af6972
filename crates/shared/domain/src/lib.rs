//! # Domain Values
//!
//! Validated value types shared by the Avia crates: flight numbers, country codes,
//! join modes and the configuration model.
//! Keep it lean: no I/O and no entity relationships, just data and the checks that make it valid.

pub mod config;
pub mod country;
mod error;
pub mod flight_number;
pub mod join;

pub use crate::country::CountryCode;
pub use crate::error::ParseError;
pub use crate::flight_number::FlightNumber;
pub use crate::join::JoinMode;

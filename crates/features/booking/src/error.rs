use avia_domain::{FlightNumber, ParseError};
use std::borrow::Cow;

/// Errors raised by flight and passenger operations.
#[avia_derive::avia_error]
pub enum BookingError {
    /// The flight number does not match `^[A-Z]{2}[0-9]{3,4}$`.
    #[error("Invalid flight number{}: {value}", format_context(.context))]
    InvalidFormat { value: String, context: Option<Cow<'static, str>> },

    /// The country code is not an ISO 3166-1 alpha-2 code.
    #[error("Invalid country code{}: {value}", format_context(.context))]
    InvalidCountryCode { value: String, context: Option<Cow<'static, str>> },

    /// Every seat of the flight is taken.
    #[error("Not enough seats for flight {flight_number} ({seats} seats){}", format_context(.context))]
    CapacityExceeded { flight_number: FlightNumber, seats: u32, context: Option<Cow<'static, str>> },

    /// A passenger transition found the two sides of the relationship out of sync.
    #[error("Relationship inconsistency{}: {message}", format_context(.context))]
    RelationshipInconsistency { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl From<ParseError> for BookingError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::FlightNumber { value } => Self::InvalidFormat { value, context: None },
            ParseError::CountryCode { value } => Self::InvalidCountryCode { value, context: None },
        }
    }
}

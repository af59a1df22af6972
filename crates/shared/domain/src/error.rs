/// Rejection of a raw string that does not form a valid domain value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid flight number '{value}': expected two uppercase letters followed by 3-4 digits")]
    FlightNumber { value: String },

    #[error("Invalid country code '{value}': not an ISO 3166-1 alpha-2 code")]
    CountryCode { value: String },
}

impl ParseError {
    /// The rejected input.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::FlightNumber { value } | Self::CountryCode { value } => value,
        }
    }
}

pub use crate::config::{ConfigError, load_config};
pub use avia_domain::config::{AviaConfig, BookingConfig, LogRotation, LoggerSettings};
pub use avia_domain::{CountryCode, FlightNumber, JoinMode, ParseError};

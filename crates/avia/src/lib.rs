//! Facade crate for the Avia booking core and its shared modules.
//! Re-exports domain/kernel primitives and wires configuration into logging.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Call [`bootstrap`] once at startup to load `avia.toml` (plus `AVIA__*` overrides) and
//!   install the logger.
//! - Create passengers with [`AviaConfig::booking`]'s join mode, or use [`prelude`] directly.

mod bootstrap;

pub use crate::bootstrap::{BootstrapError, BootstrapErrorExt, bootstrap, bootstrap_with_env, init_logger};
pub use avia_booking as booking;
pub use avia_domain as domain;
pub use avia_kernel as kernel;
pub use avia_logger as logger;

pub use avia_domain::config::AviaConfig;

pub mod prelude {
    pub use crate::bootstrap::{BootstrapError, bootstrap};
    pub use avia_booking::{BookingError, BookingErrorExt, Flight, Passenger};
    pub use avia_kernel::prelude::*;
    pub use avia_logger::Logger;
}

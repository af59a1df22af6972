//! Kernel utilities shared across the Avia crates.
//! Keep this crate lightweight: it re-exports the domain values and owns configuration loading.
//!
//! ## Config loading
//! ```rust,ignore
//! use avia_kernel::config::load_config;
//! use avia_kernel::domain::config::AviaConfig;
//!
//! let cfg: AviaConfig = load_config(Some("avia.toml")).unwrap_or_default();
//! ```

pub mod config;
pub mod prelude;

pub use avia_domain as domain;

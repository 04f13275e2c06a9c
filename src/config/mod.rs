//! Configuration module for stepper-pool.
//!
//! Describes motors by the named ports and bits their lines are wired to,
//! loadable from TOML files (with `std` feature) or pre-parsed data. A
//! [`PortMap`] turns those names into register bindings at construction.

mod motor;
mod ports;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use motor::{MotorConfig, PinConfig};
pub use ports::{PortMap, MAX_PORTS};
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::Speed;

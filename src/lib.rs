//! # stepper-pool
//!
//! Fixed-capacity pool of bipolar stepper motors driven through discrete
//! register bits.
//!
//! ## Features
//!
//! - **Register-level pins**: each line is one bit of a byte-wide output
//!   register plus its data-direction register, behind the [`Register`] trait
//! - **Handle-based pool**: motors live in a fixed array and are addressed by
//!   slot index; every call is validated before any state changes
//! - **Microstepping**: five resolutions encoded on three select lines
//! - **Position tracking**: 200-step revolution counter with wraparound and
//!   an oscillate mode that walks back and forth between two targets
//! - **no_std compatible**: Core library works without standard library
//!
//! The caller owns timing: one physical step is one
//! [`step_engage`](StepperPool::step_engage) followed by one
//! [`step_release`](StepperPool::step_release).
//!
//! ## Quick Start
//!
//! ```rust
//! use core::cell::Cell;
//! use stepper_pool::{Direction, Port, StepperConfig, StepperPool};
//!
//! let portb: Port<Cell<u8>> = Port::default();
//! let mut pool: StepperPool<'_, Cell<u8>> = StepperPool::new();
//!
//! let motor = pool.construct(
//!     StepperConfig::builder()
//!         .direction(portb.pin(0)?)
//!         .enable(portb.pin(1)?)
//!         .step(portb.pin(2)?)
//!         .build()?,
//! )?;
//!
//! pool.enable(motor)?;
//! pool.set_direction(motor, Direction::Forward)?;
//! pool.set_position(motor, 5, 0)?;
//!
//! while pool.step_engage(motor)? {
//!     pool.step_release(motor)?;
//! }
//! assert_eq!(pool.position(motor)?.value(), 5);
//! # Ok::<(), stepper_pool::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Logging macros, must come first
#[macro_use]
mod fmt;

// Core modules
pub mod config;
pub mod error;
pub mod motion;
pub mod motor;
pub mod pin;

// Re-exports for ergonomic API
pub use config::{validate_config, MotorConfig, PinConfig, PortMap, SystemConfig};
pub use error::{Error, Result, ResultCode};
pub use motion::{Direction, Mode, Resolution};
pub use motor::{
    Handle, Position, Status, Stepper, StepperConfig, StepperConfigBuilder, StepperPool, Targets,
};
pub use pin::{PinBinding, Port, Register};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::Speed;

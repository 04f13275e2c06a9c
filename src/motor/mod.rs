//! Motor module for stepper-pool.
//!
//! Provides the per-motor state machine, its construction record, and the
//! fixed-capacity pool that owns every motor.

mod builder;
mod driver;
mod pool;
mod position;
mod state;

pub use builder::{StepperConfig, StepperConfigBuilder, StepperPins};
pub use driver::Stepper;
pub use pool::{Handle, StepperPool, DEFAULT_CAPACITY, MAX_ADDRESSABLE};
pub use position::{Position, Targets, STEPS_PER_REVOLUTION};
pub use state::Status;

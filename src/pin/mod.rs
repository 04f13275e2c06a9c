//! Pin programming primitive.
//!
//! A motor line is one bit of a byte-wide output register paired with the
//! same bit of a data-direction register. This module owns the bit arithmetic
//! over those externally-owned bytes and nothing else.

mod binding;
mod register;

pub use binding::PinBinding;
pub use register::{Port, Register};

//! Motion value types.
//!
//! Direction, microstep resolution and operating mode of a motor, with their
//! pin-level encodings.

mod direction;
mod mode;
mod resolution;

pub use direction::Direction;
pub use mode::Mode;
pub use resolution::Resolution;

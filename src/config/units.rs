//! Unit types.

use serde::Deserialize;

/// Caller-defined speed value.
///
/// The pool stores and returns it unchanged; step cadence is decided by
/// whoever calls `step_engage`/`step_release`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Speed(pub u8);

impl Speed {
    /// Create a new Speed value.
    #[inline]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for Speed {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

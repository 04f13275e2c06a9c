//! Single-bit pin binding.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

use crate::error::{ConfigError, Error, Result};

use super::register::Register;

/// One bit of a register pair, borrowed for the motor's lifetime.
///
/// The bit index is stored as-is and shifted at every use; bindings never
/// carry pre-shifted masks.
#[derive(Debug)]
pub struct PinBinding<'a, R: Register> {
    output: &'a R,
    data_direction: &'a R,
    bit: u8,
}

impl<'a, R: Register> Clone for PinBinding<'a, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, R: Register> Copy for PinBinding<'a, R> {}

impl<'a, R: Register> PinBinding<'a, R> {
    /// Bind `bit` of the given output and data-direction registers.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBit` if `bit` is not in 0..=7.
    pub fn new(output: &'a R, data_direction: &'a R, bit: u8) -> Result<Self> {
        if bit > 7 {
            return Err(Error::Config(ConfigError::InvalidBit(bit)));
        }
        Ok(Self {
            output,
            data_direction,
            bit,
        })
    }

    /// Bit index within the register.
    #[inline]
    pub fn bit(&self) -> u8 {
        self.bit
    }

    /// Single-bit mask for this pin.
    #[inline]
    pub fn mask(&self) -> u8 {
        1 << self.bit
    }

    /// Drive the idle level, then mark the pin as an output.
    pub fn configure_output(&self, idle_high: bool) {
        self.write(idle_high);
        self.data_direction.set_bits(self.mask());
    }

    /// Drive the line high.
    #[inline]
    pub fn set(&self) {
        self.output.set_bits(self.mask());
    }

    /// Drive the line low.
    #[inline]
    pub fn clear(&self) {
        self.output.clear_bits(self.mask());
    }

    /// Drive the line to `high`.
    #[inline]
    pub fn write(&self, high: bool) {
        if high {
            self.set();
        } else {
            self.clear();
        }
    }

    /// Whether the output bit is currently set.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.output.test_bits(self.mask())
    }

    /// Whether the pin is configured as an output.
    #[inline]
    pub fn is_output(&self) -> bool {
        self.data_direction.test_bits(self.mask())
    }

    /// True if both bindings address the same bit of the same output register.
    pub fn same_line(&self, other: &PinBinding<'_, R>) -> bool {
        core::ptr::eq(self.output, other.output) && self.bit == other.bit
    }
}

impl<'a, R: Register> ErrorType for PinBinding<'a, R> {
    type Error = Infallible;
}

impl<'a, R: Register> OutputPin for PinBinding<'a, R> {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        self.clear();
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        self.set();
        Ok(())
    }
}

impl<'a, R: Register> StatefulOutputPin for PinBinding<'a, R> {
    fn is_set_high(&mut self) -> core::result::Result<bool, Self::Error> {
        Ok(self.is_set())
    }

    fn is_set_low(&mut self) -> core::result::Result<bool, Self::Error> {
        Ok(!self.is_set())
    }
}

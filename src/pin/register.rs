//! Byte-wide register abstraction.

use core::cell::Cell;
use core::sync::atomic::{AtomicU8, Ordering};

use crate::error::Result;

use super::binding::PinBinding;

/// A byte-addressable register that can be read and written through a
/// shared reference.
///
/// Several pin bindings usually share one register, so writes go through
/// `&self`. Implement this for a memory-mapped register wrapper to drive real
/// hardware; `Cell<u8>` and `AtomicU8` implementations are provided for
/// simulation and tests.
pub trait Register {
    /// Read the current byte.
    fn read(&self) -> u8;

    /// Overwrite the byte.
    fn write(&self, value: u8);

    /// Read-modify-write the byte.
    #[inline]
    fn modify<F: FnOnce(u8) -> u8>(&self, f: F) {
        self.write(f(self.read()));
    }

    /// Set every bit in `mask`.
    #[inline]
    fn set_bits(&self, mask: u8) {
        self.modify(|v| v | mask);
    }

    /// Clear every bit in `mask`.
    #[inline]
    fn clear_bits(&self, mask: u8) {
        self.modify(|v| v & !mask);
    }

    /// Check whether any bit in `mask` is set.
    #[inline]
    fn test_bits(&self, mask: u8) -> bool {
        self.read() & mask != 0
    }
}

impl Register for Cell<u8> {
    #[inline]
    fn read(&self) -> u8 {
        self.get()
    }

    #[inline]
    fn write(&self, value: u8) {
        self.set(value);
    }
}

impl Register for AtomicU8 {
    #[inline]
    fn read(&self) -> u8 {
        self.load(Ordering::Relaxed)
    }

    #[inline]
    fn write(&self, value: u8) {
        self.store(value, Ordering::Relaxed);
    }

    #[inline]
    fn set_bits(&self, mask: u8) {
        self.fetch_or(mask, Ordering::Relaxed);
    }

    #[inline]
    fn clear_bits(&self, mask: u8) {
        self.fetch_and(!mask, Ordering::Relaxed);
    }
}

/// An output register and its data-direction register.
#[derive(Debug, Default)]
pub struct Port<R> {
    /// Output-state register (bit set = line driven high).
    pub output: R,
    /// Data-direction register (bit set = line configured as output).
    pub data_direction: R,
}

impl<R: Register> Port<R> {
    /// Create a port from its two registers.
    pub const fn new(output: R, data_direction: R) -> Self {
        Self {
            output,
            data_direction,
        }
    }

    /// Bind one bit of this port.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBit` if `bit` is not in 0..=7.
    pub fn pin(&self, bit: u8) -> Result<PinBinding<'_, R>> {
        PinBinding::new(&self.output, &self.data_direction, bit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_bit_helpers() {
        let reg = Cell::new(0b1010_0000);
        reg.set_bits(0b0000_0011);
        assert_eq!(reg.get(), 0b1010_0011);

        reg.clear_bits(0b1000_0001);
        assert_eq!(reg.get(), 0b0010_0010);

        assert!(reg.test_bits(0b0000_0010));
        assert!(!reg.test_bits(0b0000_0001));
    }

    #[test]
    fn test_atomic_bit_helpers() {
        let reg = AtomicU8::new(0xF0);
        reg.set_bits(0x01);
        reg.clear_bits(0x80);
        assert_eq!(reg.read(), 0x71);
    }

    #[test]
    fn test_port_rejects_wide_bit() {
        let port: Port<Cell<u8>> = Port::default();
        assert!(port.pin(7).is_ok());
        assert!(port.pin(8).is_err());
    }
}

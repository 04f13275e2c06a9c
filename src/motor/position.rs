//! Position tracking for stepper motors.
//!
//! Positions are counted in physical steps within one revolution and wrap at
//! the revolution boundary.

use crate::motion::Direction;

/// Physical steps per revolution.
pub const STEPS_PER_REVOLUTION: u8 = 200;

/// Bounded step position, always in `0..STEPS_PER_REVOLUTION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position(u8);

impl Position {
    /// Origin.
    pub const ZERO: Self = Self(0);

    /// Last position before the revolution wraps.
    pub const MAX: Self = Self(STEPS_PER_REVOLUTION - 1);

    /// Create a position, or `None` if `value` is outside 0..=199.
    #[inline]
    pub const fn new(value: u8) -> Option<Self> {
        if value < STEPS_PER_REVOLUTION {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Position one step further in `direction`, wrapping 199 -> 0 forward
    /// and 0 -> 199 in reverse.
    #[inline]
    pub fn advance(self, direction: Direction) -> Self {
        match direction {
            Direction::Forward if self == Self::MAX => Self::ZERO,
            Direction::Forward => Self(self.0 + 1),
            Direction::Reverse if self == Self::ZERO => Self::MAX,
            Direction::Reverse => Self(self.0 - 1),
        }
    }
}

impl TryFrom<u8> for Position {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(value)
    }
}

impl From<Position> for u8 {
    fn from(p: Position) -> u8 {
        p.0
    }
}

/// Target pair of a motor.
///
/// Normal mode only uses `primary`; oscillate mode alternates between both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Targets {
    /// Position the motor is currently stepping toward.
    pub primary: Position,
    /// Opposite endpoint in oscillate mode.
    pub secondary: Position,
}

impl Targets {
    /// Create a target pair.
    #[inline]
    pub const fn new(primary: Position, secondary: Position) -> Self {
        Self { primary, secondary }
    }

    /// Exchange primary and secondary targets.
    #[inline]
    pub fn swap(&mut self) {
        core::mem::swap(&mut self.primary, &mut self.secondary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(Position::new(199), Some(Position::MAX));
        assert_eq!(Position::new(200), None);
        assert_eq!(Position::try_from(250), Err(250));
    }

    #[test]
    fn test_forward_wraps_at_revolution() {
        assert_eq!(Position::MAX.advance(Direction::Forward), Position::ZERO);
        assert_eq!(Position::ZERO.advance(Direction::Forward).value(), 1);
    }

    #[test]
    fn test_reverse_wraps_at_origin() {
        assert_eq!(Position::ZERO.advance(Direction::Reverse), Position::MAX);
        assert_eq!(Position::MAX.advance(Direction::Reverse).value(), 198);
    }

    #[test]
    fn test_full_revolution_returns_home() {
        let mut pos = Position::new(37).unwrap();
        for _ in 0..STEPS_PER_REVOLUTION {
            pos = pos.advance(Direction::Reverse);
        }
        assert_eq!(pos.value(), 37);
    }

    #[test]
    fn test_targets_swap() {
        let mut t = Targets::new(Position::ZERO, Position::new(10).unwrap());
        t.swap();
        assert_eq!(t.primary.value(), 10);
        assert_eq!(t.secondary, Position::ZERO);
    }
}

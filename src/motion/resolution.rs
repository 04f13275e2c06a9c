//! Microstep resolution and its select-line encoding.

use serde::Deserialize;

use crate::error::MotorError;

/// Fraction of a full step taken per pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Full step (no microstepping).
    #[default]
    Full,
    /// Half step.
    Half,
    /// Quarter step.
    Quarter,
    /// Eighth step.
    Eighth,
    /// Sixteenth step.
    Sixteenth,
}

impl Resolution {
    /// All resolutions, coarsest first.
    pub const ALL: [Resolution; 5] = [
        Resolution::Full,
        Resolution::Half,
        Resolution::Quarter,
        Resolution::Eighth,
        Resolution::Sixteenth,
    ];

    /// Levels of select lines 1, 2 and 3 (true = driven high).
    ///
    /// ```text
    /// Full       0 0 0
    /// Half       1 0 0
    /// Quarter    0 1 0
    /// Eighth     1 1 0
    /// Sixteenth  1 1 1
    /// ```
    pub const fn select_levels(self) -> [bool; 3] {
        match self {
            Resolution::Full => [false, false, false],
            Resolution::Half => [true, false, false],
            Resolution::Quarter => [false, true, false],
            Resolution::Eighth => [true, true, false],
            Resolution::Sixteenth => [true, true, true],
        }
    }

    /// Microsteps per full step.
    pub const fn divisor(self) -> u8 {
        match self {
            Resolution::Full => 1,
            Resolution::Half => 2,
            Resolution::Quarter => 4,
            Resolution::Eighth => 8,
            Resolution::Sixteenth => 16,
        }
    }
}

impl TryFrom<u8> for Resolution {
    type Error = MotorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Resolution::ALL
            .get(value as usize)
            .copied()
            .ok_or(MotorError::OptionInvalid(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_levels_are_distinct() {
        for (i, a) in Resolution::ALL.iter().enumerate() {
            for b in &Resolution::ALL[i + 1..] {
                assert_ne!(a.select_levels(), b.select_levels());
            }
        }
    }

    #[test]
    fn test_ordinal_conversion() {
        assert_eq!(Resolution::try_from(0), Ok(Resolution::Full));
        assert_eq!(Resolution::try_from(4), Ok(Resolution::Sixteenth));
        assert_eq!(Resolution::try_from(5), Err(MotorError::OptionInvalid(5)));
    }

    #[test]
    fn test_divisor() {
        assert_eq!(Resolution::Eighth.divisor(), 8);
    }
}

//! Operating mode.

use serde::Deserialize;

use crate::error::MotorError;

/// How a motor behaves when it reaches its primary target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Stop stepping until a new target is set.
    #[default]
    Normal,
    /// Swap targets and reverse, walking back and forth indefinitely.
    Oscillate,
}

impl TryFrom<u8> for Mode {
    type Error = MotorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Mode::Normal),
            1 => Ok(Mode::Oscillate),
            other => Err(MotorError::OptionInvalid(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_ordinal() {
        assert_eq!(Mode::try_from(0), Ok(Mode::Normal));
        assert_eq!(Mode::try_from(1), Ok(Mode::Oscillate));
        assert_eq!(Mode::try_from(2), Err(MotorError::OptionInvalid(2)));
    }
}

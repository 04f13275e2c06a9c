//! Rotation direction.

use serde::Deserialize;

/// Direction of motor rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Position counts up. Direction line driven low.
    #[default]
    Forward,
    /// Position counts down. Direction line driven high.
    Reverse,
}

impl Direction {
    /// The opposite direction.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }

    /// Output level of the direction line for this direction.
    #[inline]
    pub fn is_reverse(self) -> bool {
        matches!(self, Direction::Reverse)
    }
}

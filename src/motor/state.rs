//! Motor slot status.

/// Lifecycle status of a pool slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    /// Slot is free; no motor is bound to it.
    #[default]
    Available,
    /// Motor constructed, driver output stage off (enable line high).
    Disabled,
    /// Driver output stage on (enable line low).
    Enabled,
}

impl Status {
    /// Whether a motor occupies the slot.
    #[inline]
    pub fn is_active(self) -> bool {
        !matches!(self, Status::Available)
    }

    /// Status name for display/debugging.
    pub fn name(self) -> &'static str {
        match self {
            Status::Available => "Available",
            Status::Disabled => "Disabled",
            Status::Enabled => "Enabled",
        }
    }
}

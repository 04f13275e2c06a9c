//! Motor configuration from TOML.

use heapless::String;
use serde::Deserialize;

use crate::error::{ConfigError, Error, Result};
use crate::motion::{Mode, Resolution};

use super::units::Speed;

/// A line's wiring: named port and bit index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PinConfig {
    /// Port name as registered in the [`PortMap`](super::PortMap).
    pub port: String<16>,
    /// Bit index within the port (0-7).
    pub bit: u8,
}

impl PinConfig {
    /// Create a pin configuration.
    ///
    /// The bit index is checked later, when the pin is resolved.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::PortNameTooLong` if `port` exceeds 16 bytes.
    pub fn new(port: &str, bit: u8) -> Result<Self> {
        let port = String::try_from(port)
            .map_err(|_| Error::Config(ConfigError::PortNameTooLong(port.len())))?;
        Ok(Self { port, bit })
    }
}

/// Complete motor configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct MotorConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Initial speed value.
    #[serde(default)]
    pub speed: Speed,

    /// Direction line.
    pub direction: PinConfig,

    /// Active-low enable line.
    pub enable: PinConfig,

    /// Step pulse line.
    pub step: PinConfig,

    /// Optional microstep select lines 1..=3.
    #[serde(default)]
    pub resolution_select: Option<[PinConfig; 3]>,

    /// Resolution applied right after construction.
    #[serde(default)]
    pub resolution: Option<Resolution>,

    /// Mode applied right after construction.
    #[serde(default)]
    pub mode: Option<Mode>,
}

impl MotorConfig {
    /// Iterate over every configured line with its role name.
    pub fn pins(&self) -> impl Iterator<Item = (&'static str, &PinConfig)> {
        const SELECT: [&str; 3] = ["resolution_select[0]", "resolution_select[1]", "resolution_select[2]"];

        [
            ("direction", &self.direction),
            ("enable", &self.enable),
            ("step", &self.step),
        ]
        .into_iter()
        .chain(
            self.resolution_select
                .iter()
                .flat_map(|select| SELECT.into_iter().zip(select.iter())),
        )
    }
}

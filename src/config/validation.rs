//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{MotorConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks:
/// - Every bit index is in 0..=7
/// - No two lines of one motor share a port bit
///
/// Ports themselves are checked when the motor is constructed, since the
/// port map is only known then.
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (name, motor) in config.motors.iter() {
        validate_motor(name.as_str(), motor)?;
    }
    Ok(())
}

fn validate_motor(name: &str, config: &MotorConfig) -> Result<()> {
    for (_, pin) in config.pins() {
        if pin.bit > 7 {
            return Err(Error::Config(ConfigError::InvalidBit(pin.bit)));
        }
    }

    for (i, (_, a)) in config.pins().enumerate() {
        if config.pins().skip(i + 1).any(|(_, b)| a == b) {
            return Err(Error::Config(ConfigError::PinConflict {
                motor: heapless::String::try_from(name).unwrap_or_default(),
                port: a.port.clone(),
                bit: a.bit,
            }));
        }
    }

    Ok(())
}

//! Construction record and its builder.

use crate::config::units::Speed;
use crate::config::{MotorConfig, PortMap, SystemConfig};
use crate::error::{ConfigError, Error, Result};
use crate::pin::{PinBinding, Register};

/// Register bindings for one motor driver.
#[derive(Debug)]
pub struct StepperPins<'a, R: Register> {
    /// Direction line (low = forward).
    pub direction: PinBinding<'a, R>,
    /// Active-low enable line.
    pub enable: PinBinding<'a, R>,
    /// Step pulse line.
    pub step: PinBinding<'a, R>,
    /// Microstep select lines 1..=3, if wired.
    pub resolution: Option<[PinBinding<'a, R>; 3]>,
}

impl<'a, R: Register> StepperPins<'a, R> {
    /// Iterate over every bound line.
    pub fn iter(&self) -> impl Iterator<Item = &PinBinding<'a, R>> {
        [&self.direction, &self.enable, &self.step]
            .into_iter()
            .chain(self.resolution.iter().flatten())
    }
}

/// Everything needed to construct a motor in the pool.
#[derive(Debug)]
pub struct StepperConfig<'a, R: Register> {
    /// Pin bindings.
    pub pins: StepperPins<'a, R>,
    /// Initial speed value.
    pub speed: Speed,
}

impl<'a, R: Register> StepperConfig<'a, R> {
    /// Start building a configuration.
    pub fn builder() -> StepperConfigBuilder<'a, R> {
        StepperConfigBuilder::new()
    }
}

/// Builder for creating [`StepperConfig`] records.
#[derive(Debug)]
pub struct StepperConfigBuilder<'a, R: Register> {
    direction: Option<PinBinding<'a, R>>,
    enable: Option<PinBinding<'a, R>>,
    step: Option<PinBinding<'a, R>>,
    resolution: Option<[PinBinding<'a, R>; 3]>,
    speed: Speed,
}

impl<'a, R: Register> Default for StepperConfigBuilder<'a, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R: Register> StepperConfigBuilder<'a, R> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            direction: None,
            enable: None,
            step: None,
            resolution: None,
            speed: Speed::default(),
        }
    }

    /// Set the direction pin.
    pub fn direction(mut self, pin: PinBinding<'a, R>) -> Self {
        self.direction = Some(pin);
        self
    }

    /// Set the enable pin.
    pub fn enable(mut self, pin: PinBinding<'a, R>) -> Self {
        self.enable = Some(pin);
        self
    }

    /// Set the step pin.
    pub fn step(mut self, pin: PinBinding<'a, R>) -> Self {
        self.step = Some(pin);
        self
    }

    /// Set the three microstep select pins.
    pub fn resolution_pins(
        mut self,
        select1: PinBinding<'a, R>,
        select2: PinBinding<'a, R>,
        select3: PinBinding<'a, R>,
    ) -> Self {
        self.resolution = Some([select1, select2, select3]);
        self
    }

    /// Set the initial speed.
    pub fn speed(mut self, speed: Speed) -> Self {
        self.speed = speed;
        self
    }

    /// Configure from a MotorConfig, resolving port names through `ports`.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin references an unknown port or a bad bit.
    pub fn from_motor_config(mut self, config: &MotorConfig, ports: &PortMap<'a, R>) -> Result<Self> {
        self.direction = Some(ports.resolve(&config.direction)?);
        self.enable = Some(ports.resolve(&config.enable)?);
        self.step = Some(ports.resolve(&config.step)?);
        self.resolution = match &config.resolution_select {
            Some([s1, s2, s3]) => Some([ports.resolve(s1)?, ports.resolve(s2)?, ports.resolve(s3)?]),
            None => None,
        };
        self.speed = config.speed;
        Ok(self)
    }

    /// Configure from SystemConfig by motor name.
    pub fn from_config(self, config: &SystemConfig, motor_name: &str, ports: &PortMap<'a, R>) -> Result<Self> {
        let motor_config = config.motor(motor_name).ok_or_else(|| {
            Error::Config(ConfigError::MotorNotFound(
                heapless::String::try_from(motor_name).unwrap_or_default(),
            ))
        })?;

        self.from_motor_config(motor_config, ports)
    }

    /// Build the StepperConfig.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingPin` if direction, enable or step is unset.
    pub fn build(self) -> Result<StepperConfig<'a, R>> {
        let direction = self
            .direction
            .ok_or(Error::Config(ConfigError::MissingPin("direction")))?;
        let enable = self
            .enable
            .ok_or(Error::Config(ConfigError::MissingPin("enable")))?;
        let step = self
            .step
            .ok_or(Error::Config(ConfigError::MissingPin("step")))?;

        Ok(StepperConfig {
            pins: StepperPins {
                direction,
                enable,
                step,
                resolution: self.resolution,
            },
            speed: self.speed,
        })
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;
    use crate::pin::Port;

    #[test]
    fn test_build_requires_step_pin() {
        let port: Port<Cell<u8>> = Port::default();
        let result = StepperConfig::builder()
            .direction(port.pin(0).unwrap())
            .enable(port.pin(1).unwrap())
            .build();

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingPin("step")))
        ));
    }

    #[test]
    fn test_pins_iter_covers_select_lines() {
        let port: Port<Cell<u8>> = Port::default();
        let config = StepperConfig::builder()
            .direction(port.pin(0).unwrap())
            .enable(port.pin(1).unwrap())
            .step(port.pin(2).unwrap())
            .resolution_pins(port.pin(3).unwrap(), port.pin(4).unwrap(), port.pin(5).unwrap())
            .build()
            .unwrap();

        let bits: heapless::Vec<u8, 6> = config.pins.iter().map(|p| p.bit()).collect();
        assert_eq!(bits.as_slice(), &[0, 1, 2, 3, 4, 5]);
    }
}

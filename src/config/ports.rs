//! Named port lookup.

use heapless::{FnvIndexMap, String};

use crate::error::{ConfigError, Error, Result};
use crate::pin::{PinBinding, Port, Register};

use super::motor::PinConfig;

/// Maximum number of ports in a [`PortMap`].
pub const MAX_PORTS: usize = 8;

/// Maps port names used in configuration to register pairs.
pub struct PortMap<'a, R: Register> {
    ports: FnvIndexMap<String<16>, &'a Port<R>, MAX_PORTS>,
}

impl<'a, R: Register> Default for PortMap<'a, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R: Register> PortMap<'a, R> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            ports: FnvIndexMap::new(),
        }
    }

    /// Register a port under `name`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::PortNameTooLong` if the name is longer than 16
    /// bytes, or `ConfigError::TooManyPorts` if the map is full.
    pub fn insert(&mut self, name: &str, port: &'a Port<R>) -> Result<()> {
        let key = String::try_from(name)
            .map_err(|_| Error::Config(ConfigError::PortNameTooLong(name.len())))?;
        self.ports
            .insert(key, port)
            .map_err(|_| Error::Config(ConfigError::TooManyPorts))?;
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: &str, port: &'a Port<R>) -> Result<Self> {
        self.insert(name, port)?;
        Ok(self)
    }

    /// Get a port by name.
    pub fn get(&self, name: &str) -> Option<&'a Port<R>> {
        let key = String::<16>::try_from(name).ok()?;
        self.ports.get(&key).copied()
    }

    /// Number of registered ports.
    pub fn len(&self) -> usize {
        self.ports.len()
    }

    /// Check if no ports are registered.
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// Resolve a configured line to a register binding.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::PortNotFound` or `ConfigError::InvalidBit`.
    pub fn resolve(&self, pin: &PinConfig) -> Result<PinBinding<'a, R>> {
        let port = self
            .get(pin.port.as_str())
            .ok_or_else(|| Error::Config(ConfigError::PortNotFound(pin.port.clone())))?;
        port.pin(pin.bit)
    }
}

//! Fixed-capacity motor instance pool.
//!
//! Owns every [`Stepper`] and hands out [`Handle`]s. Each handle-bearing call
//! is validated before it reaches the addressed motor, and a rejected call
//! changes nothing.

use crate::config::units::Speed;
use crate::config::{PortMap, SystemConfig};
use crate::error::{MotorError, PoolError, Result};
use crate::motion::{Direction, Mode, Resolution};
use crate::pin::Register;

use super::builder::{StepperConfig, StepperConfigBuilder};
use super::driver::Stepper;
use super::position::{Position, Targets};
use super::state::Status;

/// Default number of slots.
pub const DEFAULT_CAPACITY: usize = 2;

/// Number of slots a [`Handle`] can address. Slots past this index are
/// never claimed.
pub const MAX_ADDRESSABLE: usize = u8::MAX as usize + 1;

/// Opaque motor descriptor: the slot index.
///
/// A handle is valid between a successful construction and the matching
/// destruction. The pool cannot tell a stale handle from a fresh one that
/// reuses the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Handle(u8);

impl Handle {
    /// Wrap a raw slot index.
    #[inline]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Slot index.
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }
}

impl From<u8> for Handle {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

/// Pool of up to `N` stepper motors.
///
/// # Example
///
/// ```rust
/// use core::cell::Cell;
/// use stepper_pool::{Direction, Port, StepperConfig, StepperPool};
///
/// let port: Port<Cell<u8>> = Port::default();
/// let mut pool: StepperPool<'_, Cell<u8>> = StepperPool::new();
///
/// let config = StepperConfig::builder()
///     .direction(port.pin(0)?)
///     .enable(port.pin(1)?)
///     .step(port.pin(2)?)
///     .build()?;
///
/// let motor = pool.construct(config)?;
/// pool.enable(motor)?;
/// pool.set_direction(motor, Direction::Forward)?;
/// pool.set_position(motor, 1, 0)?;
///
/// pool.step_engage(motor)?;
/// pool.step_release(motor)?;
/// assert_eq!(pool.position(motor)?.value(), 1);
/// # Ok::<(), stepper_pool::Error>(())
/// ```
#[derive(Debug)]
pub struct StepperPool<'a, R: Register, const N: usize = DEFAULT_CAPACITY> {
    /// `None` marks an available slot.
    slots: [Option<Stepper<'a, R>>; N],
}

impl<'a, R: Register, const N: usize> Default for StepperPool<'a, R, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R: Register, const N: usize> StepperPool<'a, R, N> {
    /// Create a pool with every slot available.
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
        }
    }

    /// Number of slots.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of occupied slots.
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Handles of every occupied slot, in slot order.
    pub fn handles(&self) -> impl Iterator<Item = Handle> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_some())
            .filter_map(|(i, _)| u8::try_from(i).ok().map(Handle))
    }

    /// Whether `handle` addresses an occupied slot.
    pub fn is_active(&self, handle: Handle) -> bool {
        self.get(handle).is_ok()
    }

    /// Claim the first available slot for a new motor.
    ///
    /// Every bound line is configured as an output at its idle level and the
    /// motor starts disabled at position 0 with both targets 0.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::NoneAvailable` if every slot is occupied, or if
    /// the first free slot lies beyond [`MAX_ADDRESSABLE`].
    pub fn construct(&mut self, config: StepperConfig<'a, R>) -> Result<Handle> {
        let free = self.slots.iter().position(Option::is_none);
        let Some(index) = free.and_then(|i| u8::try_from(i).ok()) else {
            warn!("no stepper slot available (capacity {})", N);
            return Err(PoolError::NoneAvailable.into());
        };

        self.slots[index as usize] = Some(Stepper::construct(config));
        let handle = Handle(index);
        debug!("constructed stepper {}", handle.index());
        Ok(handle)
    }

    /// Build a motor from a named entry of a system configuration.
    ///
    /// After construction the entry's startup resolution and mode, if given,
    /// are applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the motor is not configured, a pin cannot be
    /// resolved, or the pool is full. No slot is claimed on error.
    pub fn construct_named(
        &mut self,
        config: &SystemConfig,
        name: &str,
        ports: &PortMap<'a, R>,
    ) -> Result<Handle> {
        let stepper_config = StepperConfigBuilder::new()
            .from_config(config, name, ports)?
            .build()?;
        let handle = self.construct(stepper_config)?;

        if let Some(motor) = config.motor(name) {
            if let Some(resolution) = motor.resolution {
                self.set_resolution(handle, resolution)?;
            }
            if let Some(mode) = motor.mode {
                self.set_mode(handle, mode)?;
            }
        }
        Ok(handle)
    }

    /// Release a slot.
    ///
    /// Pin levels are left as they are. Destructing an already available
    /// slot succeeds.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::HandleInvalid` if the index is out of range.
    pub fn destruct(&mut self, handle: Handle) -> Result<()> {
        let slot = self
            .slots
            .get_mut(handle.0 as usize)
            .ok_or(PoolError::HandleInvalid(handle))?;
        if slot.take().is_some() {
            debug!("destructed stepper {}", handle.index());
        }
        Ok(())
    }

    /// Borrow a constructed motor.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::HandleInvalid` if the handle is out of range or
    /// the slot is available.
    pub fn get(&self, handle: Handle) -> Result<&Stepper<'a, R>> {
        match self.slots.get(handle.0 as usize) {
            Some(Some(stepper)) => Ok(stepper),
            _ => Err(PoolError::HandleInvalid(handle).into()),
        }
    }

    fn get_mut(&mut self, handle: Handle) -> Result<&mut Stepper<'a, R>> {
        match self.slots.get_mut(handle.0 as usize) {
            Some(Some(stepper)) => Ok(stepper),
            _ => {
                warn!("rejected invalid stepper handle {}", handle.index());
                Err(PoolError::HandleInvalid(handle).into())
            }
        }
    }

    /// Status of a slot. Unlike the other queries this accepts available
    /// slots and reports them as `Status::Available`.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::HandleInvalid` if the index is out of range.
    pub fn status(&self, handle: Handle) -> Result<Status> {
        match self.slots.get(handle.0 as usize) {
            Some(Some(stepper)) => Ok(stepper.status()),
            Some(None) => Ok(Status::Available),
            None => Err(PoolError::HandleInvalid(handle).into()),
        }
    }

    /// Turn the driver on (enable line low).
    ///
    /// # Errors
    ///
    /// Returns `PoolError::HandleInvalid` if the handle is not active.
    pub fn enable(&mut self, handle: Handle) -> Result<()> {
        self.get_mut(handle)?.enable();
        Ok(())
    }

    /// Turn the driver off (enable line high).
    ///
    /// # Errors
    ///
    /// Returns `PoolError::HandleInvalid` if the handle is not active.
    pub fn disable(&mut self, handle: Handle) -> Result<()> {
        self.get_mut(handle)?.disable();
        Ok(())
    }

    /// Get the speed value.
    pub fn speed(&self, handle: Handle) -> Result<Speed> {
        Ok(self.get(handle)?.speed())
    }

    /// Store a new speed value.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::HandleInvalid` if the handle is not active.
    pub fn set_speed(&mut self, handle: Handle, speed: Speed) -> Result<()> {
        self.get_mut(handle)?.set_speed(speed);
        Ok(())
    }

    /// Get the microstep resolution.
    pub fn resolution(&self, handle: Handle) -> Result<Resolution> {
        Ok(self.get(handle)?.resolution())
    }

    /// Drive the select lines for `resolution`.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::HandleInvalid` if the handle is not active.
    pub fn set_resolution(&mut self, handle: Handle, resolution: Resolution) -> Result<()> {
        self.get_mut(handle)?.set_resolution(resolution);
        Ok(())
    }

    /// Set the resolution from its ordinal (0 = full .. 4 = sixteenth).
    ///
    /// # Errors
    ///
    /// `HandleInvalid` is checked before `MotorError::OptionInvalid`.
    pub fn set_resolution_raw(&mut self, handle: Handle, value: u8) -> Result<()> {
        let stepper = self.get_mut(handle)?;
        let resolution = Resolution::try_from(value).map_err(|e| {
            warn!("rejected resolution ordinal {}", value);
            e
        })?;
        stepper.set_resolution(resolution);
        Ok(())
    }

    /// Get the rotation direction.
    pub fn direction(&self, handle: Handle) -> Result<Direction> {
        Ok(self.get(handle)?.direction())
    }

    /// Store the direction and drive the direction line.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::HandleInvalid` if the handle is not active.
    pub fn set_direction(&mut self, handle: Handle, direction: Direction) -> Result<()> {
        self.get_mut(handle)?.set_direction(direction);
        Ok(())
    }

    /// Get the operating mode.
    pub fn mode(&self, handle: Handle) -> Result<Mode> {
        Ok(self.get(handle)?.mode())
    }

    /// Set the operating mode.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::HandleInvalid` if the handle is not active.
    pub fn set_mode(&mut self, handle: Handle, mode: Mode) -> Result<()> {
        self.get_mut(handle)?.set_mode(mode);
        Ok(())
    }

    /// Set the mode from its ordinal (0 = normal, 1 = oscillate).
    ///
    /// # Errors
    ///
    /// `HandleInvalid` is checked before `MotorError::OptionInvalid`.
    pub fn set_mode_raw(&mut self, handle: Handle, value: u8) -> Result<()> {
        let stepper = self.get_mut(handle)?;
        let mode = Mode::try_from(value).map_err(|e| {
            warn!("rejected mode ordinal {}", value);
            e
        })?;
        stepper.set_mode(mode);
        Ok(())
    }

    /// Get the current position.
    pub fn position(&self, handle: Handle) -> Result<Position> {
        Ok(self.get(handle)?.position())
    }

    /// Get the target pair.
    pub fn targets(&self, handle: Handle) -> Result<Targets> {
        Ok(self.get(handle)?.targets())
    }

    /// Store both targets, or neither.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::PositionInvalid` if either target exceeds 199.
    pub fn set_position(&mut self, handle: Handle, primary: u8, secondary: u8) -> Result<()> {
        let stepper = self.get_mut(handle)?;
        let (Some(p), Some(s)) = (Position::new(primary), Position::new(secondary)) else {
            warn!("rejected targets ({}, {})", primary, secondary);
            return Err(MotorError::PositionInvalid { primary, secondary }.into());
        };
        stepper.set_targets(Targets::new(p, s));
        Ok(())
    }

    /// First half of a step pulse: raise the step line and advance.
    ///
    /// Only acts when the motor is enabled and not at its primary target.
    /// Returns whether a pulse was started.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::HandleInvalid` if the handle is not active.
    pub fn step_engage(&mut self, handle: Handle) -> Result<bool> {
        Ok(self.get_mut(handle)?.step_engage())
    }

    /// Second half of a step pulse: lower the step line.
    ///
    /// Reaching the primary target in oscillate mode swaps the targets and
    /// reverses direction.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::HandleInvalid` if the handle is not active.
    pub fn step_release(&mut self, handle: Handle) -> Result<()> {
        let stepper = self.get_mut(handle)?;
        if stepper.step_release() {
            debug!(
                "stepper {} reversed at {}",
                handle.index(),
                stepper.position().value()
            );
        } else if !stepper.is_moving() {
            trace!("stepper {} idle at {}", handle.index(), stepper.position().value());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;
    use crate::error::Error;
    use crate::pin::Port;

    fn config(port: &Port<Cell<u8>>) -> StepperConfig<'_, Cell<u8>> {
        StepperConfig::builder()
            .direction(port.pin(0).unwrap())
            .enable(port.pin(1).unwrap())
            .step(port.pin(2).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_handles_are_slot_indices() {
        let p0: Port<Cell<u8>> = Port::default();
        let p1: Port<Cell<u8>> = Port::default();
        let mut pool: StepperPool<'_, Cell<u8>> = StepperPool::new();

        assert_eq!(pool.construct(config(&p0)).unwrap(), Handle::new(0));
        assert_eq!(pool.construct(config(&p1)).unwrap(), Handle::new(1));
        assert_eq!(pool.active_count(), 2);
        assert_eq!(pool.handles().count(), 2);
    }

    #[test]
    fn test_destruct_frees_lowest_slot_first() {
        let p: Port<Cell<u8>> = Port::default();
        let mut pool: StepperPool<'_, Cell<u8>, 3> = StepperPool::new();

        let a = pool.construct(config(&p)).unwrap();
        let _b = pool.construct(config(&p)).unwrap();
        pool.destruct(a).unwrap();

        assert_eq!(pool.status(a).unwrap(), Status::Available);
        assert_eq!(pool.construct(config(&p)).unwrap(), a);
    }

    #[test]
    fn test_destruct_out_of_range() {
        let mut pool: StepperPool<'_, Cell<u8>> = StepperPool::new();
        assert_eq!(
            pool.destruct(Handle::new(2)),
            Err(Error::Pool(PoolError::HandleInvalid(Handle::new(2))))
        );
        assert!(pool.destruct(Handle::new(1)).is_ok());
    }

    #[test]
    fn test_set_mode_raw_checks_handle_first() {
        let mut pool: StepperPool<'_, Cell<u8>> = StepperPool::new();
        assert!(matches!(
            pool.set_mode_raw(Handle::new(0), 9),
            Err(Error::Pool(PoolError::HandleInvalid(_)))
        ));
    }

    #[test]
    fn test_set_mode_raw_rejects_unknown_mode() {
        let p: Port<Cell<u8>> = Port::default();
        let mut pool: StepperPool<'_, Cell<u8>> = StepperPool::new();
        let h = pool.construct(config(&p)).unwrap();

        pool.set_mode(h, Mode::Oscillate).unwrap();
        assert_eq!(
            pool.set_mode_raw(h, 2),
            Err(Error::Motor(MotorError::OptionInvalid(2)))
        );
        assert_eq!(pool.mode(h).unwrap(), Mode::Oscillate);
    }

    #[test]
    fn test_slots_past_u8_range_are_never_claimed() {
        let p: Port<Cell<u8>> = Port::default();
        let mut pool: StepperPool<'_, Cell<u8>, 300> = StepperPool::new();

        for i in 0..MAX_ADDRESSABLE {
            assert_eq!(pool.construct(config(&p)).unwrap(), Handle::new(i as u8));
        }
        assert_eq!(
            pool.construct(config(&p)),
            Err(Error::Pool(PoolError::NoneAvailable))
        );
        assert_eq!(pool.active_count(), MAX_ADDRESSABLE);
        assert_eq!(pool.handles().count(), MAX_ADDRESSABLE);

        pool.destruct(Handle::new(0)).unwrap();
        assert_eq!(pool.construct(config(&p)).unwrap(), Handle::new(0));
    }

    #[test]
    fn test_speed_round_trip() {
        let p: Port<Cell<u8>> = Port::default();
        let mut pool: StepperPool<'_, Cell<u8>> = StepperPool::new();
        let h = pool
            .construct(StepperConfig { speed: Speed(42), ..config(&p) })
            .unwrap();

        assert_eq!(pool.speed(h).unwrap(), Speed(42));
        pool.set_speed(h, Speed(7)).unwrap();
        assert_eq!(pool.speed(h).unwrap(), Speed(7));
    }
}

//! Stepper motor instance.
//!
//! Holds one motor's pin bindings and logical state, and translates state
//! changes into register bit writes. All entry points are reached through
//! [`StepperPool`](super::StepperPool), which validates handles first.

use crate::config::units::Speed;
use crate::motion::{Direction, Mode, Resolution};
use crate::pin::Register;

use super::builder::{StepperConfig, StepperPins};
use super::position::{Position, Targets};
use super::state::Status;

/// One constructed stepper motor.
#[derive(Debug)]
pub struct Stepper<'a, R: Register> {
    /// Register bindings for every line of the driver.
    pins: StepperPins<'a, R>,

    /// Enabled or disabled. Never `Available` while the stepper exists.
    status: Status,

    /// Caller-defined speed value, stored only.
    speed: Speed,

    /// Current microstep resolution.
    resolution: Resolution,

    /// Current rotation direction.
    direction: Direction,

    /// Normal or oscillate.
    mode: Mode,

    /// Logical position within one revolution.
    position: Position,

    /// Primary and secondary targets.
    targets: Targets,
}

impl<'a, R: Register> Stepper<'a, R> {
    /// Bind a motor and program every line to its idle level.
    ///
    /// Direction, step and select lines idle low; the active-low enable line
    /// idles high so the driver starts disabled.
    pub(crate) fn construct(config: StepperConfig<'a, R>) -> Self {
        let pins = config.pins;

        pins.direction.configure_output(false);
        pins.enable.configure_output(true);
        pins.step.configure_output(false);
        if let Some(select) = &pins.resolution {
            for line in select {
                line.configure_output(false);
            }
        }

        Self {
            pins,
            status: Status::Disabled,
            speed: config.speed,
            resolution: Resolution::Full,
            direction: Direction::Forward,
            mode: Mode::Normal,
            position: Position::ZERO,
            targets: Targets::default(),
        }
    }

    /// Get the pin bindings.
    #[inline]
    pub fn pins(&self) -> &StepperPins<'a, R> {
        &self.pins
    }

    /// Get the status.
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Get the speed value.
    #[inline]
    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Get the microstep resolution.
    #[inline]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Get the rotation direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Get the operating mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Get the current position.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Get the target pair.
    #[inline]
    pub fn targets(&self) -> Targets {
        self.targets
    }

    /// Whether the motor is enabled and away from its primary target.
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.status == Status::Enabled && self.position != self.targets.primary
    }

    pub(crate) fn enable(&mut self) {
        self.pins.enable.clear();
        self.status = Status::Enabled;
    }

    pub(crate) fn disable(&mut self) {
        self.pins.enable.set();
        self.status = Status::Disabled;
    }

    pub(crate) fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    /// Write all three select lines, then record the resolution.
    pub(crate) fn set_resolution(&mut self, resolution: Resolution) {
        if let Some(select) = &self.pins.resolution {
            for (line, level) in select.iter().zip(resolution.select_levels()) {
                line.write(level);
            }
        }
        self.resolution = resolution;
    }

    pub(crate) fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.pins.direction.write(direction.is_reverse());
    }

    pub(crate) fn set_targets(&mut self, targets: Targets) {
        self.targets = targets;
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Raise the step line and advance one position.
    ///
    /// Does nothing unless the motor is moving. Returns whether a pulse was
    /// started.
    pub(crate) fn step_engage(&mut self) -> bool {
        if !self.is_moving() {
            return false;
        }
        self.pins.step.set();
        self.position = self.position.advance(self.direction);
        true
    }

    /// Lower the step line and handle arrival at the primary target.
    ///
    /// In oscillate mode arrival swaps the targets and reverses direction.
    /// Returns whether that reversal happened.
    pub(crate) fn step_release(&mut self) -> bool {
        self.pins.step.clear();

        if self.position != self.targets.primary {
            return false;
        }
        match self.mode {
            Mode::Normal => false,
            Mode::Oscillate => {
                self.targets.swap();
                self.set_direction(self.direction.reversed());
                true
            }
        }
    }
}

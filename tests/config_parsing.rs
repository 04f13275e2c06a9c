//! Configuration-driven construction tests.
//!
//! These tests verify the workflow from TOML parsing to a constructed motor.

#![cfg(feature = "std")]

use core::cell::Cell;

use stepper_pool::config::{parse_config, validate_config, SystemConfig};
use stepper_pool::error::ConfigError;
use stepper_pool::{Error, Mode, Port, PortMap, Resolution, Speed, Status, StepperPool};

// =============================================================================
// Test configuration data
// =============================================================================

const TWO_MOTOR_CONFIG: &str = r#"
[motors.turntable]
name = "Turntable"
speed = 40
direction = { port = "PORTB", bit = 0 }
enable = { port = "PORTB", bit = 1 }
step = { port = "PORTB", bit = 2 }
resolution_select = [
    { port = "PORTD", bit = 0 },
    { port = "PORTD", bit = 1 },
    { port = "PORTD", bit = 2 },
]
resolution = "eighth"
mode = "oscillate"

[motors.camera]
name = "Camera Tilt"
speed = 15
direction = { port = "PORTB", bit = 4 }
enable = { port = "PORTB", bit = 5 }
step = { port = "PORTB", bit = 6 }
"#;

struct Ports {
    portb: Port<Cell<u8>>,
    portd: Port<Cell<u8>>,
}

impl Ports {
    fn new() -> Self {
        Self {
            portb: Port::default(),
            portd: Port::default(),
        }
    }

    fn map(&self) -> PortMap<'_, Cell<u8>> {
        PortMap::new()
            .with("PORTB", &self.portb)
            .and_then(|m| m.with("PORTD", &self.portd))
            .unwrap()
    }
}

#[test]
fn parse_two_motor_config() {
    let config = parse_config(TWO_MOTOR_CONFIG).expect("Should parse config");

    let names: Vec<_> = config.motor_names().collect();
    assert_eq!(names, ["turntable", "camera"]);

    let turntable = config.motor("turntable").unwrap();
    assert_eq!(turntable.name.as_str(), "Turntable");
    assert_eq!(turntable.speed, Speed(40));
    assert_eq!(turntable.resolution, Some(Resolution::Eighth));
    assert_eq!(turntable.mode, Some(Mode::Oscillate));

    let camera = config.motor("camera").unwrap();
    assert!(camera.resolution_select.is_none());
    assert!(camera.mode.is_none());
}

#[test]
fn construct_named_applies_startup_settings() {
    let ports = Ports::new();
    let map = ports.map();
    let config = parse_config(TWO_MOTOR_CONFIG).unwrap();
    let mut pool: StepperPool<'_, Cell<u8>> = StepperPool::new();

    let turntable = pool.construct_named(&config, "turntable", &map).unwrap();
    let camera = pool.construct_named(&config, "camera", &map).unwrap();

    assert_eq!(pool.speed(turntable).unwrap(), Speed(40));
    assert_eq!(pool.resolution(turntable).unwrap(), Resolution::Eighth);
    assert_eq!(pool.mode(turntable).unwrap(), Mode::Oscillate);
    assert_eq!(ports.portd.output.get(), 0b0000_0011);

    assert_eq!(pool.status(camera).unwrap(), Status::Disabled);
    assert_eq!(pool.mode(camera).unwrap(), Mode::Normal);

    // Both enable lines idle high, everything else low.
    assert_eq!(ports.portb.output.get(), 0b0010_0010);
    assert_eq!(ports.portb.data_direction.get(), 0b0111_0111);
}

#[test]
fn construct_named_unknown_motor() {
    let ports = Ports::new();
    let map = ports.map();
    let config = parse_config(TWO_MOTOR_CONFIG).unwrap();
    let mut pool: StepperPool<'_, Cell<u8>> = StepperPool::new();

    assert!(matches!(
        pool.construct_named(&config, "gripper", &map),
        Err(Error::Config(ConfigError::MotorNotFound(_)))
    ));
    assert_eq!(pool.active_count(), 0);
}

#[test]
fn construct_named_missing_port_claims_no_slot() {
    let ports = Ports::new();
    let map = PortMap::new().with("PORTB", &ports.portb).unwrap();
    let config = parse_config(TWO_MOTOR_CONFIG).unwrap();
    let mut pool: StepperPool<'_, Cell<u8>> = StepperPool::new();

    assert!(matches!(
        pool.construct_named(&config, "turntable", &map),
        Err(Error::Config(ConfigError::PortNotFound(_)))
    ));
    assert_eq!(pool.active_count(), 0);
    assert_eq!(ports.portb.data_direction.get(), 0);
}

#[test]
fn validate_rejects_bit_out_of_range() {
    let toml = r#"
[motors.m1]
name = "Motor"
direction = { port = "PORTB", bit = 0 }
enable = { port = "PORTB", bit = 1 }
step = { port = "PORTB", bit = 8 }
"#;

    let config: SystemConfig = toml::from_str(toml).expect("Should deserialize");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidBit(8)))
    ));
}

#[test]
fn parse_reports_missing_step_line() {
    let toml = r#"
[motors.m1]
name = "Motor"
direction = { port = "PORTB", bit = 0 }
enable = { port = "PORTB", bit = 1 }
"#;

    assert!(matches!(
        parse_config(toml),
        Err(Error::Config(ConfigError::ParseError(_)))
    ));
}

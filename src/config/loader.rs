//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use stepper_pool::load_config;
///
/// let config = load_config("motors.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{Mode, Resolution};

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[motors.x_axis]
name = "X-Axis"
direction = { port = "PORTB", bit = 0 }
enable = { port = "PORTB", bit = 1 }
step = { port = "PORTB", bit = 2 }
"#;

        let config = parse_config(toml).unwrap();
        let motor = config.motor("x_axis").unwrap();
        assert_eq!(motor.speed.value(), 0);
        assert!(motor.resolution_select.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[motors.turntable]
name = "Turntable"
speed = 120
direction = { port = "PORTB", bit = 0 }
enable = { port = "PORTB", bit = 1 }
step = { port = "PORTB", bit = 2 }
resolution_select = [
    { port = "PORTD", bit = 4 },
    { port = "PORTD", bit = 5 },
    { port = "PORTD", bit = 6 },
]
resolution = "quarter"
mode = "oscillate"
"#;

        let config = parse_config(toml).unwrap();
        let motor = config.motor("turntable").unwrap();
        assert_eq!(motor.speed.value(), 120);
        assert_eq!(motor.resolution, Some(Resolution::Quarter));
        assert_eq!(motor.mode, Some(Mode::Oscillate));
    }

    #[test]
    fn test_parse_rejects_conflicting_pins() {
        let toml = r#"
[motors.x_axis]
name = "X-Axis"
direction = { port = "PORTB", bit = 0 }
enable = { port = "PORTB", bit = 0 }
step = { port = "PORTB", bit = 2 }
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::PinConflict { .. }))
        ));
    }

    #[test]
    fn test_parse_error_on_unknown_mode() {
        let toml = r#"
[motors.x_axis]
name = "X-Axis"
direction = { port = "PORTB", bit = 0 }
enable = { port = "PORTB", bit = 1 }
step = { port = "PORTB", bit = 2 }
mode = "spin"
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }
}

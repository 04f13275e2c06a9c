//! Error types for stepper-pool.
//!
//! Every failure is reported through the return value. A call that returns an
//! error has not touched any motor state or register bit.

use core::fmt;

use crate::motor::Handle;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all stepper-pool operations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Pool slot allocation or handle lookup error
    Pool(PoolError),
    /// Motor argument error
    Motor(MotorError),
    /// Configuration parsing, validation or pin resolution error
    Config(ConfigError),
}

/// Instance pool errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PoolError {
    /// Every slot is occupied
    NoneAvailable,
    /// Handle is out of range or addresses an available slot
    HandleInvalid(Handle),
}

/// Motor argument errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// A target position lies outside 0..=199
    PositionInvalid {
        /// Requested primary target
        primary: u8,
        /// Requested secondary target
        secondary: u8,
    },
    /// Unrecognized option value (mode or resolution ordinal)
    OptionInvalid(u8),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Bit index outside 0..=7
    InvalidBit(u8),
    /// Pin references a port that is not in the port map
    PortNotFound(heapless::String<16>),
    /// Port map has no room for another port
    TooManyPorts,
    /// Port name longer than 16 bytes (carries the actual length)
    PortNameTooLong(usize),
    /// Motor name not found in configuration
    MotorNotFound(heapless::String<32>),
    /// A required pin binding was not supplied
    MissingPin(&'static str),
    /// Two lines of the same motor are bound to one register bit
    PinConflict {
        /// Motor name
        motor: heapless::String<32>,
        /// Port shared by both lines
        port: heapless::String<16>,
        /// Bit shared by both lines
        bit: u8,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Numeric status taxonomy for callers that only want a code.
///
/// Ordinals follow the historical C driver (`None` is success).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ResultCode {
    /// Success
    None = 0,
    /// Pool exhausted
    NoneAvailable = 1,
    /// Bad or inactive handle
    HandleInvalid = 2,
    /// Target out of 0..=199
    PositionInvalid = 3,
    /// Unrecognized option value
    OptionInvalid = 4,
    /// Configuration could not be used
    ConfigInvalid = 5,
}

impl ResultCode {
    /// Collapse a result into its status code.
    pub fn from_result<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => ResultCode::None,
            Err(e) => e.code(),
        }
    }
}

impl Error {
    /// Status code for this error.
    pub fn code(&self) -> ResultCode {
        match self {
            Error::Pool(PoolError::NoneAvailable) => ResultCode::NoneAvailable,
            Error::Pool(PoolError::HandleInvalid(_)) => ResultCode::HandleInvalid,
            Error::Motor(MotorError::PositionInvalid { .. }) => ResultCode::PositionInvalid,
            Error::Motor(MotorError::OptionInvalid(_)) => ResultCode::OptionInvalid,
            Error::Config(_) => ResultCode::ConfigInvalid,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Pool(e) => write!(f, "Pool error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
            Error::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::NoneAvailable => write!(f, "No motor instance available"),
            PoolError::HandleInvalid(h) => write!(f, "Handle {} is invalid", h.index()),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PositionInvalid { primary, secondary } => write!(
                f,
                "Invalid target positions ({}, {}). Must be 0-199",
                primary, secondary
            ),
            MotorError::OptionInvalid(v) => write!(f, "Invalid option value: {}", v),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidBit(b) => write!(f, "Invalid bit index: {}. Must be 0-7", b),
            ConfigError::PortNotFound(name) => write!(f, "Port '{}' not found", name),
            ConfigError::TooManyPorts => write!(f, "Too many ports (max 8)"),
            ConfigError::PortNameTooLong(len) => {
                write!(f, "Port name is {} bytes long (max 16)", len)
            }
            ConfigError::MotorNotFound(name) => write!(f, "Motor '{}' not found", name),
            ConfigError::MissingPin(pin) => write!(f, "{} pin is required", pin),
            ConfigError::PinConflict { motor, port, bit } => write!(
                f,
                "Motor '{}' binds {}.{} to more than one line",
                motor, port, bit
            ),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

// Conversion impls
impl From<PoolError> for Error {
    fn from(e: PoolError) -> Self {
        Error::Pool(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for PoolError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

//! Error types for carousel-motion.
//!
//! Provides unified error handling across configuration, motor control,
//! step execution and inbound command framing.

use core::fmt;

use crate::motion::Direction;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all carousel-motion operations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motor output error
    Motor(MotorError),
    /// Step execution error
    Motion(MotionError),
    /// Inbound frame rejected
    Frame(FrameError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Duty level above 100 percent
    InvalidDutyLevel(u8),
    /// Overflow level must name one of the four table entries (1-4)
    InvalidOverflowLevel(u8),
    /// Sensor poll interval must be > 0
    InvalidPollInterval(u32),
    /// Edge timeout shorter than a single poll interval
    InvalidEdgeTimeout {
        /// Configured timeout in milliseconds
        timeout_ms: u32,
        /// Configured poll interval in microseconds
        poll_interval_us: u32,
    },
    /// A required part was not supplied to the builder
    MissingPart(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motor output errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// Direction output or sensor input operation failed
    PinError,
    /// Duty output operation failed
    PwmError,
}

/// Step execution errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionError {
    /// No falling edge was seen within the configured timeout.
    ///
    /// The motor has been stopped before this error is returned.
    SensorTimeout {
        /// Step that failed (1-based)
        step: u8,
        /// Direction the motor was driving
        direction: Direction,
    },
}

/// Inbound command frame errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Frame does not start with the expected prefix
    MissingPrefix,
    /// Frame has no ':' separating header and payload
    MissingColon,
    /// Payload is a bare value with no ',' separator
    MissingComma,
    /// Index or item count is not a signed integer
    InvalidNumber,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
            Error::Motion(e) => write!(f, "Motion error: {}", e),
            Error::Frame(e) => write!(f, "Frame error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidDutyLevel(v) => {
                write!(f, "Invalid duty level: {}%. Must be 0-100", v)
            }
            ConfigError::InvalidOverflowLevel(v) => {
                write!(f, "Invalid overflow level: {}. Must be 1-4", v)
            }
            ConfigError::InvalidPollInterval(v) => {
                write!(f, "Invalid poll interval: {}us. Must be > 0", v)
            }
            ConfigError::InvalidEdgeTimeout {
                timeout_ms,
                poll_interval_us,
            } => write!(
                f,
                "Edge timeout {}ms is shorter than poll interval {}us",
                timeout_ms, poll_interval_us
            ),
            ConfigError::MissingPart(part) => write!(f, "{} is required", part),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
            MotorError::PwmError => write!(f, "PWM duty operation failed"),
        }
    }
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::SensorTimeout { step, direction } => {
                write!(f, "No sensor edge on step {} ({}), motor stopped", step, direction)
            }
        }
    }
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::MissingPrefix => write!(f, "Frame has no '+IPD' prefix"),
            FrameError::MissingColon => write!(f, "Frame has no ':' separator"),
            FrameError::MissingComma => write!(f, "Payload has no ',' separator"),
            FrameError::InvalidNumber => write!(f, "Payload field is not an integer"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

impl From<MotionError> for Error {
    fn from(e: MotionError) -> Self {
        Error::Motion(e)
    }
}

impl From<FrameError> for Error {
    fn from(e: FrameError) -> Self {
        Error::Frame(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "std")]
impl std::error::Error for MotionError {}

#[cfg(feature = "std")]
impl std::error::Error for FrameError {}

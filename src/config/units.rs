//! Unit types for drive strength and timing.
//!
//! Keeps duty percentages and the two time scales used by the carousel
//! (milliseconds for settling waits, microseconds for sensor polling)
//! apart at compile time.

use core::fmt;

use serde::Deserialize;

use crate::error::ConfigError;

/// Motor drive strength as a percentage of the PWM peripheral's maximum duty.
///
/// Validated at construction to lie in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DutyLevel(u8);

impl DutyLevel {
    /// Motor de-energized.
    pub const OFF: Self = Self(0);
    /// Full drive.
    pub const FULL: Self = Self(100);

    /// Create a new duty level with validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDutyLevel` above 100 percent.
    pub fn new(percent: u8) -> Result<Self, ConfigError> {
        if percent <= 100 {
            Ok(Self(percent))
        } else {
            Err(ConfigError::InvalidDutyLevel(percent))
        }
    }

    /// Create a duty level, clamping anything above 100 percent.
    #[inline]
    pub const fn saturating(percent: u8) -> Self {
        if percent > 100 {
            Self::FULL
        } else {
            Self(percent)
        }
    }

    /// Get the raw percentage.
    #[inline]
    pub const fn percent(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DutyLevel {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for DutyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl<'de> Deserialize<'de> for DutyLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use core::fmt::Write;
        let value = u8::deserialize(deserializer)?;
        DutyLevel::new(value).map_err(|e| {
            let mut buf = heapless::String::<128>::new();
            let _ = write!(buf, "{}", e);
            serde::de::Error::custom(buf.as_str())
        })
    }
}

/// Duration in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Milliseconds(pub u32);

impl Milliseconds {
    /// Create a new Milliseconds value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Convert to microseconds.
    #[inline]
    pub const fn as_micros(self) -> u64 {
        self.0 as u64 * 1000
    }
}

/// Duration in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Microseconds(pub u32);

impl Microseconds {
    /// Create a new Microseconds value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

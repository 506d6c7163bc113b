//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{CarouselConfig, SpeedTable, TimingConfig};

/// Validate a carousel configuration.
///
/// Checks:
/// - Duty levels are at most 100 percent
/// - The overflow level names one of the four table entries
/// - The sensor poll interval is non-zero
/// - The edge timeout fits at least one poll interval
pub fn validate_config(config: &CarouselConfig) -> Result<()> {
    validate_speed(&config.speed)?;
    validate_timing(&config.timing)?;
    Ok(())
}

fn validate_speed(speed: &SpeedTable) -> Result<()> {
    // DutyLevel validates on deserialization; this covers tables built in code.
    for level in core::iter::once(&speed.base).chain(speed.levels.iter()) {
        if level.percent() > 100 {
            return Err(Error::Config(ConfigError::InvalidDutyLevel(level.percent())));
        }
    }

    if !speed.is_valid() {
        return Err(Error::Config(ConfigError::InvalidOverflowLevel(
            speed.overflow_level,
        )));
    }

    Ok(())
}

fn validate_timing(timing: &TimingConfig) -> Result<()> {
    if timing.poll_interval.0 == 0 {
        return Err(Error::Config(ConfigError::InvalidPollInterval(
            timing.poll_interval.0,
        )));
    }

    if timing.max_polls() == 0 {
        return Err(Error::Config(ConfigError::InvalidEdgeTimeout {
            timeout_ms: timing.edge_timeout.0,
            poll_interval_us: timing.poll_interval.0,
        }));
    }

    Ok(())
}

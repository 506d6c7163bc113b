//! Settling and sensor-wait timing from TOML.

use serde::Deserialize;

use super::units::{Microseconds, Milliseconds};

/// Bounded waits used while stepping the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Active brake hold after every confirmed step.
    #[serde(rename = "brake_hold_ms")]
    pub brake_hold: Milliseconds,

    /// Rest between consecutive steps of one command.
    #[serde(rename = "step_rest_ms")]
    pub step_rest: Milliseconds,

    /// Longest wait for a sensor falling edge before the step is failed.
    #[serde(rename = "edge_timeout_ms")]
    pub edge_timeout: Milliseconds,

    /// Delay between two sensor samples.
    #[serde(rename = "poll_interval_us")]
    pub poll_interval: Microseconds,
}

impl TimingConfig {
    /// Number of sensor samples that fit in the edge timeout.
    ///
    /// Zero when the poll interval is zero or longer than the timeout.
    pub fn max_polls(&self) -> u32 {
        if self.poll_interval.0 == 0 {
            return 0;
        }
        let polls = self.edge_timeout.as_micros() / u64::from(self.poll_interval.0);
        u32::try_from(polls).unwrap_or(u32::MAX)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            brake_hold: Milliseconds(150),
            step_rest: Milliseconds(500),
            edge_timeout: Milliseconds(3000),
            poll_interval: Microseconds(500),
        }
    }
}

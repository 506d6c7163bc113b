//! Falling-edge detection on a position sensor.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::config::{Microseconds, TimingConfig};
use crate::error::{MotorError, Result};

/// Result of waiting for a sensor edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// A high-to-low transition was observed.
    Confirmed,
    /// The timeout elapsed without a transition.
    TimedOut,
}

/// Polls one sensor input for a high-to-low transition.
///
/// Inputs are pulled up, so the idle level is high and each physical step
/// produces exactly one falling edge. The wait is bounded by a fixed number
/// of poll intervals.
pub struct EdgeDetector<'a, IN>
where
    IN: InputPin,
{
    pin: &'a mut IN,
    max_polls: u32,
    poll_interval: Microseconds,
}

impl<'a, IN> EdgeDetector<'a, IN>
where
    IN: InputPin,
{
    /// Create a detector over `pin` using the timeout and poll interval from `timing`.
    pub fn new(pin: &'a mut IN, timing: &TimingConfig) -> Self {
        Self {
            pin,
            max_polls: timing.max_polls(),
            poll_interval: timing.poll_interval,
        }
    }

    /// Sample the current level as the baseline for the next wait.
    ///
    /// Returns `true` when the input is high (asserted).
    pub fn sample(&mut self) -> Result<bool> {
        Ok(self.pin.is_high().map_err(|_| MotorError::PinError)?)
    }

    /// Wait for the first high-to-low transition after `baseline`.
    ///
    /// A low baseline must first return high before an edge counts. Returns
    /// on the first edge, so bounces later in the same step are never seen.
    pub fn await_falling_edge<DELAY: DelayNs>(
        &mut self,
        baseline: bool,
        delay: &mut DELAY,
    ) -> Result<EdgeOutcome> {
        let mut previous = baseline;

        for _ in 0..self.max_polls {
            let level = self.pin.is_high().map_err(|_| MotorError::PinError)?;
            if previous && !level {
                return Ok(EdgeOutcome::Confirmed);
            }
            previous = level;
            delay.delay_us(self.poll_interval.value());
        }

        Ok(EdgeOutcome::TimedOut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Milliseconds;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    fn timing(polls: u32) -> TimingConfig {
        TimingConfig {
            edge_timeout: Milliseconds(polls),
            poll_interval: Microseconds(1000),
            ..TimingConfig::default()
        }
    }

    #[test]
    fn test_edge_after_high_baseline() {
        let expectations = [
            Transaction::get(State::High),
            Transaction::get(State::High),
            Transaction::get(State::High),
            Transaction::get(State::Low),
        ];
        let mut pin = PinMock::new(&expectations);
        let mut delay = NoopDelay::new();

        let mut detector = EdgeDetector::new(&mut pin, &timing(10));
        let baseline = detector.sample().unwrap();
        assert!(baseline);
        let outcome = detector.await_falling_edge(baseline, &mut delay).unwrap();
        assert_eq!(outcome, EdgeOutcome::Confirmed);

        pin.done();
    }

    #[test]
    fn test_low_baseline_needs_rising_first() {
        let expectations = [
            Transaction::get(State::Low),
            Transaction::get(State::Low),
            Transaction::get(State::High),
            Transaction::get(State::Low),
        ];
        let mut pin = PinMock::new(&expectations);
        let mut delay = NoopDelay::new();

        let mut detector = EdgeDetector::new(&mut pin, &timing(10));
        let baseline = detector.sample().unwrap();
        assert!(!baseline);
        let outcome = detector.await_falling_edge(baseline, &mut delay).unwrap();
        assert_eq!(outcome, EdgeOutcome::Confirmed);

        pin.done();
    }

    #[test]
    fn test_times_out_after_max_polls() {
        let expectations = [
            Transaction::get(State::High),
            Transaction::get(State::High),
            Transaction::get(State::High),
        ];
        let mut pin = PinMock::new(&expectations);
        let mut delay = NoopDelay::new();

        // 3 ms at 1 ms per poll
        let mut detector = EdgeDetector::new(&mut pin, &timing(3));
        let outcome = detector.await_falling_edge(true, &mut delay).unwrap();
        assert_eq!(outcome, EdgeOutcome::TimedOut);

        pin.done();
    }
}

//! Step execution - drive, confirm, brake, rest.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::pwm::SetDutyCycle;

use crate::config::{DutyLevel, TimingConfig};
use crate::error::{Error, MotionError, Result};
use crate::motor::MotorDriver;
use crate::sensor::{EdgeDetector, EdgeOutcome, SensorPair};

use super::planner::{Direction, MotionPlan};

/// Outcome of a completed plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExecutionReport {
    /// The plan that was executed.
    pub plan: MotionPlan,
    /// Duty the motor was driven at.
    pub duty: DutyLevel,
    /// Number of sensor-confirmed steps.
    pub steps_completed: u8,
}

impl ExecutionReport {
    /// Check if the plan moved the carousel at all.
    #[inline]
    pub fn moved(&self) -> bool {
        self.steps_completed > 0
    }
}

/// Runs a [`MotionPlan`] one confirmed step at a time.
///
/// For a plan of N steps this performs exactly N edge confirmations, N brake
/// holds and N-1 rests. The duty level is fixed for the whole plan.
pub struct StepExecutor<'a, FWD, REV, PWM, IN, DELAY>
where
    FWD: OutputPin,
    REV: OutputPin,
    PWM: SetDutyCycle,
    IN: InputPin,
    DELAY: DelayNs,
{
    motor: &'a mut MotorDriver<FWD, REV, PWM>,
    sensors: &'a mut SensorPair<IN>,
    delay: &'a mut DELAY,
    timing: &'a TimingConfig,
}

impl<'a, FWD, REV, PWM, IN, DELAY> StepExecutor<'a, FWD, REV, PWM, IN, DELAY>
where
    FWD: OutputPin,
    REV: OutputPin,
    PWM: SetDutyCycle,
    IN: InputPin,
    DELAY: DelayNs,
{
    /// Create an executor over borrowed hardware.
    pub fn new(
        motor: &'a mut MotorDriver<FWD, REV, PWM>,
        sensors: &'a mut SensorPair<IN>,
        delay: &'a mut DELAY,
        timing: &'a TimingConfig,
    ) -> Self {
        Self {
            motor,
            sensors,
            delay,
            timing,
        }
    }

    /// Execute `plan` at `duty` and block until it completes.
    ///
    /// A no-op plan returns immediately without touching the hardware.
    ///
    /// # Errors
    ///
    /// - `MotionError::SensorTimeout` if a step is not confirmed in time
    /// - `MotorError` if a pin or PWM operation fails
    ///
    /// The motor is stopped before any error is returned. If that stop itself
    /// fails, its `MotorError` is returned instead and the motor state stays
    /// energized.
    pub fn execute(&mut self, plan: &MotionPlan, duty: DutyLevel) -> Result<ExecutionReport> {
        let direction = match plan.direction() {
            Some(direction) if !plan.is_noop() => direction,
            _ => {
                info!("no motion");
                return Ok(ExecutionReport {
                    plan: *plan,
                    duty,
                    steps_completed: 0,
                });
            }
        };

        let total = plan.step_count();
        info!("moving {} {} step(s) at {}", direction, total, duty);

        let mut detector = self.sensors.detector(direction, self.timing);

        for step in 1..=total {
            let result = Self::run_step(
                self.motor,
                &mut detector,
                self.delay,
                self.timing,
                direction,
                duty,
                step,
            );

            if let Err(e) = result {
                // A failed stop outranks the step error: the motor may still be energized.
                if let Err(stop_error) = self.motor.stop() {
                    error!("motor stop failed after {}: {}", e, stop_error);
                    return Err(stop_error);
                }
                return Err(e);
            }

            info!("step {}/{} completed", step, total);

            if step < total {
                self.delay.delay_ms(self.timing.step_rest.value());
            }
        }

        info!("completed");
        Ok(ExecutionReport {
            plan: *plan,
            duty,
            steps_completed: total,
        })
    }

    fn run_step(
        motor: &mut MotorDriver<FWD, REV, PWM>,
        detector: &mut EdgeDetector<'_, IN>,
        delay: &mut DELAY,
        timing: &TimingConfig,
        direction: Direction,
        duty: DutyLevel,
        step: u8,
    ) -> Result<()> {
        let baseline = detector.sample()?;
        motor.start(direction, duty)?;

        match detector.await_falling_edge(baseline, delay)? {
            EdgeOutcome::Confirmed => {}
            EdgeOutcome::TimedOut => {
                warn!("no sensor edge on step {} ({})", step, direction);
                return Err(Error::Motion(MotionError::SensorTimeout { step, direction }));
            }
        }

        motor.brake(delay, timing.brake_hold)
    }
}

//! Carousel facade.
//!
//! Ties duty selection, direction planning and step execution together
//! behind a single command entry point.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::pwm::SetDutyCycle;

use crate::command::{parse_frame, Command};
use crate::config::CarouselConfig;
use crate::error::Result;
use crate::motion::{plan, ExecutionReport, SpeedPolicy, StepExecutor};
use crate::motor::{MotorDriver, MotorState};
use crate::sensor::SensorPair;

/// A motorized carousel with closed-loop step confirmation.
///
/// Generic over:
/// - `FWD` / `REV`: H-bridge direction outputs
/// - `PWM`: duty output
/// - `IN`: position sensor inputs (one per direction)
/// - `DELAY`: delay provider for brake hold, rest and sensor polling
///
/// Commands run one at a time: [`handle`](Self::handle) blocks until the
/// carousel has settled after the last step.
///
/// # Example
///
/// ```rust,ignore
/// use carousel_motion::{Carousel, Command};
///
/// let mut carousel = Carousel::builder()
///     .forward_pin(in1)
///     .reverse_pin(in2)
///     .pwm(ena)
///     .forward_sensor(sensor_a)
///     .reverse_sensor(sensor_b)
///     .delay(delay)
///     .config(config)
///     .build()?;
///
/// let report = carousel.handle(Command::new(3, 2))?;
/// ```
pub struct Carousel<FWD, REV, PWM, IN, DELAY>
where
    FWD: OutputPin,
    REV: OutputPin,
    PWM: SetDutyCycle,
    IN: InputPin,
    DELAY: DelayNs,
{
    motor: MotorDriver<FWD, REV, PWM>,
    sensors: SensorPair<IN>,
    delay: DELAY,
    config: CarouselConfig,
}

impl<FWD, REV, PWM, IN, DELAY> Carousel<FWD, REV, PWM, IN, DELAY>
where
    FWD: OutputPin,
    REV: OutputPin,
    PWM: SetDutyCycle,
    IN: InputPin,
    DELAY: DelayNs,
{
    /// Start building a carousel.
    pub fn builder() -> super::CarouselBuilder<FWD, REV, PWM, IN, DELAY> {
        super::CarouselBuilder::new()
    }

    pub(crate) fn new(
        motor: MotorDriver<FWD, REV, PWM>,
        sensors: SensorPair<IN>,
        delay: DELAY,
        config: CarouselConfig,
    ) -> Self {
        Self {
            motor,
            sensors,
            delay,
            config,
        }
    }

    /// Get the configuration.
    #[inline]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Get the motor output state.
    #[inline]
    pub fn motor_state(&self) -> MotorState {
        self.motor.state()
    }

    /// Rotate the carousel for one command and block until it settles.
    ///
    /// The duty level is chosen once from the item count and held for the
    /// whole plan.
    ///
    /// # Errors
    ///
    /// Returns `MotionError::SensorTimeout` if a step is never confirmed, or
    /// a `MotorError` on a hardware fault. The motor is stopped in both cases.
    pub fn handle(&mut self, command: Command) -> Result<ExecutionReport> {
        let duty = SpeedPolicy::new(&self.config.speed).duty(command.item_count);
        let motion = plan(command.index);

        info!(
            "command index={} items={} -> {} step(s) at {}",
            command.index,
            command.item_count,
            motion.step_count(),
            duty
        );

        StepExecutor::new(
            &mut self.motor,
            &mut self.sensors,
            &mut self.delay,
            &self.config.timing,
        )
        .execute(&motion, duty)
    }

    /// Parse a received line and handle the command it carries.
    ///
    /// Rejected frames never reach the motor.
    pub fn handle_frame(&mut self, line: &str) -> Result<ExecutionReport> {
        let command = parse_frame(line).map_err(|e| {
            warn!("frame rejected: {}", e);
            e
        })?;
        self.handle(command)
    }

    /// Force both outputs low and zero duty.
    pub fn stop(&mut self) -> Result<()> {
        self.motor.stop()
    }

    /// Release the hardware resources.
    pub fn release(self) -> (MotorDriver<FWD, REV, PWM>, SensorPair<IN>, DELAY) {
        (self.motor, self.sensors, self.delay)
    }
}

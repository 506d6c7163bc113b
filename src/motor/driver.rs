//! DC motor H-bridge driver.
//!
//! Generic over embedded-hal 1.0 output pins for the two direction inputs
//! of the bridge and a `SetDutyCycle` channel for drive strength.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::config::{DutyLevel, Milliseconds, MotorWiring};
use crate::error::{MotorError, Result};
use crate::motion::Direction;

use super::state::MotorState;

/// H-bridge driver for the carousel motor.
///
/// Generic over:
/// - `FWD`: forward direction output (must implement `OutputPin`)
/// - `REV`: reverse direction output (must implement `OutputPin`)
/// - `PWM`: duty output (must implement `SetDutyCycle`)
///
/// The driver knows nothing about steps or sensors.
pub struct MotorDriver<FWD, REV, PWM>
where
    FWD: OutputPin,
    REV: OutputPin,
    PWM: SetDutyCycle,
{
    /// Output asserted for forward rotation.
    forward_pin: FWD,

    /// Output asserted for reverse rotation.
    reverse_pin: REV,

    /// Drive strength output.
    pwm: PWM,

    /// Swap which output drives which direction.
    invert_direction: bool,

    /// Current output state.
    state: MotorState,
}

impl<FWD, REV, PWM> MotorDriver<FWD, REV, PWM>
where
    FWD: OutputPin,
    REV: OutputPin,
    PWM: SetDutyCycle,
{
    /// Create a new driver in the Idle state.
    ///
    /// The outputs are not touched until the first command; call
    /// [`stop`](Self::stop) to force a known level after power-up.
    pub fn new(forward_pin: FWD, reverse_pin: REV, pwm: PWM, wiring: MotorWiring) -> Self {
        Self {
            forward_pin,
            reverse_pin,
            pwm,
            invert_direction: wiring.invert_direction,
            state: MotorState::Idle,
        }
    }

    /// Get the current output state.
    #[inline]
    pub fn state(&self) -> MotorState {
        self.state
    }

    /// Energize the motor in `direction` at `duty`.
    ///
    /// The opposite output is released before the active one is asserted so
    /// the bridge never passes through the brake configuration.
    pub fn start(&mut self, direction: Direction, duty: DutyLevel) -> Result<()> {
        let wired = if self.invert_direction {
            direction.opposite()
        } else {
            direction
        };

        match wired {
            Direction::Forward => {
                self.reverse_pin.set_low().map_err(|_| MotorError::PinError)?;
                self.forward_pin.set_high().map_err(|_| MotorError::PinError)?;
            }
            Direction::Reverse => {
                self.forward_pin.set_low().map_err(|_| MotorError::PinError)?;
                self.reverse_pin.set_high().map_err(|_| MotorError::PinError)?;
            }
        }

        self.pwm
            .set_duty_cycle_percent(duty.percent())
            .map_err(|_| MotorError::PwmError)?;

        self.state = MotorState::Driving;
        debug!("motor driving {} at {}", direction, duty);
        Ok(())
    }

    /// Coast: zero duty and both outputs released. Idempotent.
    ///
    /// All three writes are attempted even if an earlier one fails. The state
    /// only returns to `Idle` when every write succeeded; otherwise the first
    /// error is returned.
    pub fn stop(&mut self) -> Result<()> {
        let duty = self
            .pwm
            .set_duty_cycle_fully_off()
            .map_err(|_| MotorError::PwmError);
        let forward = self.forward_pin.set_low().map_err(|_| MotorError::PinError);
        let reverse = self.reverse_pin.set_low().map_err(|_| MotorError::PinError);

        duty.and(forward).and(reverse)?;

        self.state = MotorState::Idle;
        Ok(())
    }

    /// Short-circuit brake for `hold`, then [`stop`](Self::stop).
    ///
    /// Both outputs are asserted at full duty to kill the carousel's inertia.
    /// Blocks for the whole hold.
    pub fn brake<DELAY: DelayNs>(&mut self, delay: &mut DELAY, hold: Milliseconds) -> Result<()> {
        self.state = MotorState::Braking;

        self.forward_pin.set_high().map_err(|_| MotorError::PinError)?;
        self.reverse_pin.set_high().map_err(|_| MotorError::PinError)?;
        self.pwm
            .set_duty_cycle_fully_on()
            .map_err(|_| MotorError::PwmError)?;

        delay.delay_ms(hold.value());

        self.stop()
    }

    /// Release the hardware resources.
    pub fn release(self) -> (FWD, REV, PWM) {
        (self.forward_pin, self.reverse_pin, self.pwm)
    }
}

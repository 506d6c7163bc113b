//! Builder pattern for Carousel.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::pwm::SetDutyCycle;

use crate::config::{validate_config, CarouselConfig};
use crate::error::{ConfigError, Error, Result};
use crate::motor::MotorDriver;
use crate::sensor::SensorPair;

use super::system::Carousel;

/// Builder for creating Carousel instances.
pub struct CarouselBuilder<FWD, REV, PWM, IN, DELAY>
where
    FWD: OutputPin,
    REV: OutputPin,
    PWM: SetDutyCycle,
    IN: InputPin,
    DELAY: DelayNs,
{
    forward_pin: Option<FWD>,
    reverse_pin: Option<REV>,
    pwm: Option<PWM>,
    forward_sensor: Option<IN>,
    reverse_sensor: Option<IN>,
    delay: Option<DELAY>,
    config: CarouselConfig,
}

impl<FWD, REV, PWM, IN, DELAY> Default for CarouselBuilder<FWD, REV, PWM, IN, DELAY>
where
    FWD: OutputPin,
    REV: OutputPin,
    PWM: SetDutyCycle,
    IN: InputPin,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<FWD, REV, PWM, IN, DELAY> CarouselBuilder<FWD, REV, PWM, IN, DELAY>
where
    FWD: OutputPin,
    REV: OutputPin,
    PWM: SetDutyCycle,
    IN: InputPin,
    DELAY: DelayNs,
{
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self {
            forward_pin: None,
            reverse_pin: None,
            pwm: None,
            forward_sensor: None,
            reverse_sensor: None,
            delay: None,
            config: CarouselConfig::default(),
        }
    }

    /// Set the forward direction output.
    pub fn forward_pin(mut self, pin: FWD) -> Self {
        self.forward_pin = Some(pin);
        self
    }

    /// Set the reverse direction output.
    pub fn reverse_pin(mut self, pin: REV) -> Self {
        self.reverse_pin = Some(pin);
        self
    }

    /// Set the duty output.
    pub fn pwm(mut self, pwm: PWM) -> Self {
        self.pwm = Some(pwm);
        self
    }

    /// Set the sensor that confirms forward steps.
    pub fn forward_sensor(mut self, pin: IN) -> Self {
        self.forward_sensor = Some(pin);
        self
    }

    /// Set the sensor that confirms reverse steps.
    pub fn reverse_sensor(mut self, pin: IN) -> Self {
        self.reverse_sensor = Some(pin);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the configuration.
    pub fn config(mut self, config: CarouselConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the Carousel.
    ///
    /// # Errors
    ///
    /// Returns an error if a hardware part is missing or the configuration
    /// fails validation.
    pub fn build(self) -> Result<Carousel<FWD, REV, PWM, IN, DELAY>> {
        let forward_pin = self.forward_pin.ok_or_else(|| missing("forward_pin"))?;
        let reverse_pin = self.reverse_pin.ok_or_else(|| missing("reverse_pin"))?;
        let pwm = self.pwm.ok_or_else(|| missing("pwm"))?;
        let forward_sensor = self.forward_sensor.ok_or_else(|| missing("forward_sensor"))?;
        let reverse_sensor = self.reverse_sensor.ok_or_else(|| missing("reverse_sensor"))?;
        let delay = self.delay.ok_or_else(|| missing("delay"))?;

        validate_config(&self.config)?;

        let motor = MotorDriver::new(forward_pin, reverse_pin, pwm, self.config.motor);
        let sensors = SensorPair::new(forward_sensor, reverse_sensor);

        Ok(Carousel::new(motor, sensors, delay, self.config))
    }
}

fn missing(part: &'static str) -> Error {
    Error::Config(ConfigError::MissingPart(part))
}

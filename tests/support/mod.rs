//! Recording fakes for the carousel hardware.
//!
//! All fakes share one `Bench` so tests can assert on the exact order of
//! output changes, delays and sensor reads.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use embedded_hal::pwm::{self, SetDutyCycle};

use carousel_motion::{Carousel, CarouselConfig, Direction, Microseconds, Milliseconds};

pub const MAX_DUTY: u16 = 1000;
pub const BRAKE_HOLD_MS: u32 = 10;
pub const STEP_REST_MS: u32 = 20;

/// Something that happened on the bench.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Forward(bool),
    Reverse(bool),
    Duty(u16),
    DelayMs(u32),
    DelayUs(u32),
    Read(Direction),
}

#[derive(Debug, Default)]
pub struct Bench {
    pub events: Vec<Event>,
    pub forward_out: bool,
    pub reverse_out: bool,
    pub duty: u16,
    forward_levels: VecDeque<bool>,
    reverse_levels: VecDeque<bool>,
}

pub type SharedBench = Rc<RefCell<Bench>>;

impl Bench {
    pub fn count(&self, event: Event) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }

    pub fn reads(&self, direction: Direction) -> usize {
        self.count(Event::Read(direction))
    }

    pub fn brake_holds(&self) -> usize {
        self.count(Event::DelayMs(BRAKE_HOLD_MS))
    }

    pub fn rests(&self) -> usize {
        self.count(Event::DelayMs(STEP_REST_MS))
    }

    pub fn is_de_energized(&self) -> bool {
        !self.forward_out && !self.reverse_out && self.duty == 0
    }
}

pub struct OutPin {
    bench: SharedBench,
    direction: Direction,
}

impl ErrorType for OutPin {
    type Error = Infallible;
}

impl OutputPin for OutPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true);
        Ok(())
    }
}

impl OutPin {
    fn set(&mut self, level: bool) {
        let mut bench = self.bench.borrow_mut();
        match self.direction {
            Direction::Forward => {
                bench.forward_out = level;
                bench.events.push(Event::Forward(level));
            }
            Direction::Reverse => {
                bench.reverse_out = level;
                bench.events.push(Event::Reverse(level));
            }
        }
    }
}

pub struct DutyOut {
    bench: SharedBench,
}

impl pwm::ErrorType for DutyOut {
    type Error = Infallible;
}

impl SetDutyCycle for DutyOut {
    fn max_duty_cycle(&self) -> u16 {
        MAX_DUTY
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        let mut bench = self.bench.borrow_mut();
        bench.duty = duty;
        bench.events.push(Event::Duty(duty));
        Ok(())
    }
}

/// Replays scripted levels, then stays high forever.
pub struct Sensor {
    bench: SharedBench,
    direction: Direction,
}

impl ErrorType for Sensor {
    type Error = Infallible;
}

impl InputPin for Sensor {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        let mut bench = self.bench.borrow_mut();
        bench.events.push(Event::Read(self.direction));
        let level = match self.direction {
            Direction::Forward => bench.forward_levels.pop_front(),
            Direction::Reverse => bench.reverse_levels.pop_front(),
        };
        Ok(level.unwrap_or(true))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

pub struct Delay {
    bench: SharedBench,
}

impl DelayNs for Delay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_us(&mut self, us: u32) {
        self.bench.borrow_mut().events.push(Event::DelayUs(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.bench.borrow_mut().events.push(Event::DelayMs(ms));
    }
}

pub type TestCarousel = Carousel<OutPin, OutPin, DutyOut, Sensor, Delay>;

pub fn test_config() -> CarouselConfig {
    let mut config = CarouselConfig::default();
    config.timing.brake_hold = Milliseconds(BRAKE_HOLD_MS);
    config.timing.step_rest = Milliseconds(STEP_REST_MS);
    config.timing.edge_timeout = Milliseconds(5);
    config.timing.poll_interval = Microseconds(1000);
    config
}

/// One sensor pulse per step: high at the baseline, low on the next poll.
pub fn pulses(steps: usize) -> Vec<bool> {
    (0..steps).flat_map(|_| [true, false]).collect()
}

pub fn carousel(
    config: CarouselConfig,
    forward_levels: Vec<bool>,
    reverse_levels: Vec<bool>,
) -> (TestCarousel, SharedBench) {
    try_carousel(config, forward_levels, reverse_levels).expect("test carousel should build")
}

pub fn try_carousel(
    config: CarouselConfig,
    forward_levels: Vec<bool>,
    reverse_levels: Vec<bool>,
) -> carousel_motion::Result<(TestCarousel, SharedBench)> {
    let bench = Rc::new(RefCell::new(Bench {
        forward_levels: forward_levels.into(),
        reverse_levels: reverse_levels.into(),
        ..Bench::default()
    }));

    let carousel = Carousel::builder()
        .forward_pin(OutPin {
            bench: bench.clone(),
            direction: Direction::Forward,
        })
        .reverse_pin(OutPin {
            bench: bench.clone(),
            direction: Direction::Reverse,
        })
        .pwm(DutyOut {
            bench: bench.clone(),
        })
        .forward_sensor(Sensor {
            bench: bench.clone(),
            direction: Direction::Forward,
        })
        .reverse_sensor(Sensor {
            bench: bench.clone(),
            direction: Direction::Reverse,
        })
        .delay(Delay {
            bench: bench.clone(),
        })
        .config(config)
        .build()?;

    Ok((carousel, bench))
}

//! Position sensor module for carousel-motion.
//!
//! The gear train routes step pulses to a different input for each
//! direction, so every plan resolves its sensor once from a [`SensorPair`].

mod edge;

pub use edge::{EdgeDetector, EdgeOutcome};

use embedded_hal::digital::InputPin;

use crate::config::TimingConfig;
use crate::motion::Direction;

/// The two position-sensor inputs, one per direction.
pub struct SensorPair<IN>
where
    IN: InputPin,
{
    forward: IN,
    reverse: IN,
}

impl<IN> SensorPair<IN>
where
    IN: InputPin,
{
    /// Create a sensor pair.
    pub fn new(forward: IN, reverse: IN) -> Self {
        Self { forward, reverse }
    }

    /// Get the input that confirms steps in `direction`.
    pub fn select(&mut self, direction: Direction) -> &mut IN {
        match direction {
            Direction::Forward => &mut self.forward,
            Direction::Reverse => &mut self.reverse,
        }
    }

    /// Build an edge detector over the input for `direction`.
    pub fn detector(&mut self, direction: Direction, timing: &TimingConfig) -> EdgeDetector<'_, IN> {
        EdgeDetector::new(self.select(direction), timing)
    }

    /// Release the inputs as `(forward, reverse)`.
    pub fn release(self) -> (IN, IN) {
        (self.forward, self.reverse)
    }
}

//! Direction planning.
//!
//! Maps a signed command index onto one of eight carousel positions and
//! picks the shorter way round: five, six or seven positions forward are
//! driven as three, two or one positions in reverse.

use core::fmt;

/// Number of positions on the carousel.
pub const POSITIONS: u32 = 8;

/// Longest move the planner ever produces (half a revolution).
pub const MAX_STEPS: u8 = (POSITIONS / 2) as u8;

/// Direction of carousel rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Forward rotation, confirmed by the forward sensor.
    Forward,
    /// Reverse rotation, confirmed by the reverse sensor.
    Reverse,
}

impl Direction {
    /// Get the opposite direction.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => f.write_str("forward"),
            Direction::Reverse => f.write_str("reverse"),
        }
    }
}

/// Direction and number of physical steps for one command.
///
/// `direction()` is `None` exactly when `step_count()` is zero, and the step
/// count never exceeds [`MAX_STEPS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionPlan {
    direction: Option<Direction>,
    step_count: u8,
}

impl MotionPlan {
    /// The no-op plan.
    pub const NONE: Self = Self {
        direction: None,
        step_count: 0,
    };

    /// Create a plan that moves `step_count` steps in `direction`.
    ///
    /// Returns `None` for a zero step count or one above [`MAX_STEPS`].
    pub const fn new(direction: Direction, step_count: u8) -> Option<Self> {
        if step_count == 0 || step_count > MAX_STEPS {
            None
        } else {
            Some(Self {
                direction: Some(direction),
                step_count,
            })
        }
    }

    /// Direction of travel, `None` for the no-op plan.
    #[inline]
    pub const fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Number of physical steps.
    #[inline]
    pub const fn step_count(&self) -> u8 {
        self.step_count
    }

    /// Check if this plan moves nothing.
    #[inline]
    pub const fn is_noop(&self) -> bool {
        self.step_count == 0
    }
}

impl Default for MotionPlan {
    fn default() -> Self {
        Self::NONE
    }
}

/// Plan the motion for a command index.
///
/// Only the magnitude of `index` matters. Zero and whole revolutions
/// (8, 16, ...) are no-ops; 1-4 go forward; 5-7 go the short way in reverse.
pub fn plan(index: i32) -> MotionPlan {
    let magnitude = index.unsigned_abs();
    if magnitude == 0 {
        return MotionPlan::NONE;
    }

    let position = (magnitude - 1) % POSITIONS + 1;
    let half = u32::from(MAX_STEPS);

    if position <= half {
        MotionPlan {
            direction: Some(Direction::Forward),
            step_count: position as u8,
        }
    } else if position < POSITIONS {
        MotionPlan {
            direction: Some(Direction::Reverse),
            step_count: (POSITIONS - position) as u8,
        }
    } else {
        MotionPlan::NONE
    }
}

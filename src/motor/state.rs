//! Motor output state.

use core::fmt;

/// What the H-bridge outputs are currently doing.
///
/// `Idle` is both the initial state and the state between commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorState {
    /// Both outputs low, zero duty.
    #[default]
    Idle,
    /// One output asserted at the command's duty level.
    Driving,
    /// Both outputs asserted at full duty for the brake hold.
    Braking,
}

impl MotorState {
    /// Get the state name as a static string.
    pub fn name(self) -> &'static str {
        match self {
            MotorState::Idle => "Idle",
            MotorState::Driving => "Driving",
            MotorState::Braking => "Braking",
        }
    }

    /// Check if the motor is energized.
    #[inline]
    pub fn is_energized(self) -> bool {
        self != MotorState::Idle
    }
}

impl fmt::Display for MotorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

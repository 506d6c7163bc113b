//! Item-count to drive-strength table from TOML.

use serde::Deserialize;

use super::units::DutyLevel;

/// Number of item-count entries in the speed table.
pub const SPEED_LEVELS: usize = 4;

/// Duty levels keyed by the number of items hanging on the carousel.
///
/// ```toml
/// [speed]
/// base = 55
/// levels = [65, 75, 85, 100]
/// overflow_level = 3
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpeedTable {
    /// Duty used for an empty carousel (item count <= 0).
    pub base: DutyLevel,

    /// Duty for item counts 1 through 4.
    pub levels: [DutyLevel; SPEED_LEVELS],

    /// 1-based entry of `levels` used for item counts above 4.
    pub overflow_level: u8,
}

impl SpeedTable {
    /// Create a speed table.
    pub const fn new(base: DutyLevel, levels: [DutyLevel; SPEED_LEVELS], overflow_level: u8) -> Self {
        Self {
            base,
            levels,
            overflow_level,
        }
    }

    /// Check that `overflow_level` names a table entry.
    pub fn is_valid(&self) -> bool {
        (1..=SPEED_LEVELS as u8).contains(&self.overflow_level)
    }

    /// Duty for a 1-based table entry, if it exists.
    pub fn level(&self, entry: u8) -> Option<DutyLevel> {
        let index = usize::from(entry).checked_sub(1)?;
        self.levels.get(index).copied()
    }
}

impl Default for SpeedTable {
    fn default() -> Self {
        Self::new(
            DutyLevel::saturating(55),
            [
                DutyLevel::saturating(65),
                DutyLevel::saturating(75),
                DutyLevel::saturating(85),
                DutyLevel::FULL,
            ],
            3,
        )
    }
}

//! Item-count to duty selection.

use crate::config::{DutyLevel, SpeedTable, SPEED_LEVELS};

/// Selects the drive strength for a command from its item count.
///
/// Out-of-range counts are never an error: non-positive counts use the base
/// level and counts above the table use the configured overflow entry.
#[derive(Debug, Clone, Copy)]
pub struct SpeedPolicy<'a> {
    table: &'a SpeedTable,
}

impl<'a> SpeedPolicy<'a> {
    /// Create a policy over a speed table.
    pub fn new(table: &'a SpeedTable) -> Self {
        Self { table }
    }

    /// Duty level for `item_count` items.
    pub fn duty(&self, item_count: i32) -> DutyLevel {
        if item_count <= 0 {
            return self.table.base;
        }

        match u8::try_from(item_count) {
            Ok(entry) if usize::from(entry) <= SPEED_LEVELS => self.table.levels[usize::from(entry) - 1],
            _ => self.overflow(),
        }
    }

    fn overflow(&self) -> DutyLevel {
        // Validated configs always hit; the third entry backs up hand-built tables.
        self.table
            .level(self.table.overflow_level)
            .unwrap_or(self.table.levels[2])
    }
}

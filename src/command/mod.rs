//! Command module for carousel-motion.
//!
//! Decoded rotation requests and the line framing they arrive in.

mod frame;

pub use frame::{parse_frame, FRAME_PREFIX};

/// One rotation request.
///
/// Consumed once by [`Carousel::handle`](crate::Carousel::handle) and not
/// retained after its plan is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command {
    /// Signed target index; only its magnitude is used.
    pub index: i32,
    /// Number of items on the carousel, selects the duty level.
    pub item_count: i32,
}

impl Command {
    /// Create a new command.
    pub const fn new(index: i32, item_count: i32) -> Self {
        Self { index, item_count }
    }
}

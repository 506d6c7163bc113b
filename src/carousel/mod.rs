//! Carousel module for carousel-motion.
//!
//! Provides the command-level facade over motor, sensors and timing.

mod builder;
mod system;

pub use builder::CarouselBuilder;
pub use system::Carousel;

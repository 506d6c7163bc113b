//! Configuration module for carousel-motion.
//!
//! Provides the speed table, timing and wiring configuration, loaded from
//! TOML files (with `std` feature) or built in code.

mod motor;
mod speed;
mod system;
mod timing;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use motor::MotorWiring;
pub use speed::{SpeedTable, SPEED_LEVELS};
pub use system::CarouselConfig;
pub use timing::TimingConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{DutyLevel, Microseconds, Milliseconds};

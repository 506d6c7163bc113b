//! Motor module for carousel-motion.
//!
//! Provides the H-bridge actuation primitives: drive, coast and brake.

mod driver;
mod state;

pub use driver::MotorDriver;
pub use state::MotorState;

//! # carousel-motion
//!
//! Closed-loop step control for an eight-position motorized carousel with
//! embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Shortest path**: Any signed index maps onto one of eight positions and
//!   rotates at most four steps, forward or reverse
//! - **Confirmed steps**: Every step waits for a falling edge on the sensor
//!   bound to its direction, with a bounded timeout
//! - **Active braking**: Short-circuit brake hold after each step
//! - **embedded-hal 1.0**: `OutputPin` + `SetDutyCycle` for the H-bridge,
//!   `InputPin` for sensors, `DelayNs` for timing
//! - **no_std compatible**: Core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use carousel_motion::{Carousel, CarouselConfig};
//!
//! // Load configuration from TOML
//! let config: CarouselConfig = carousel_motion::load_config("carousel.toml")?;
//!
//! // Create the carousel with embedded-hal pins
//! let mut carousel = Carousel::builder()
//!     .forward_pin(in1)
//!     .reverse_pin(in2)
//!     .pwm(ena)
//!     .forward_sensor(sensor_a)
//!     .reverse_sensor(sensor_b)
//!     .delay(delay)
//!     .config(config)
//!     .build()?;
//!
//! // Handle a received radio line
//! carousel.handle_frame("+IPD,52:3,2")?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets
//! - `log`: Enables `log` logging for hosted targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Must come first so the logging macros are visible to later modules
#[macro_use]
mod fmt;

// Core modules
pub mod carousel;
pub mod command;
pub mod config;
pub mod error;
pub mod motion;
pub mod motor;
pub mod sensor;

// Re-exports for ergonomic API
pub use carousel::{Carousel, CarouselBuilder};
pub use command::{parse_frame, Command};
pub use config::{validate_config, CarouselConfig, SpeedTable, TimingConfig};
pub use error::{Error, Result};
pub use motion::{plan, Direction, ExecutionReport, MotionPlan, SpeedPolicy, StepExecutor};
pub use motor::{MotorDriver, MotorState};
pub use sensor::{EdgeDetector, EdgeOutcome, SensorPair};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{DutyLevel, Microseconds, Milliseconds};

//! Motion module for carousel-motion.
//!
//! Provides direction planning, duty selection and step execution.

mod executor;
mod planner;
mod speed;

pub use executor::{ExecutionReport, StepExecutor};
pub use planner::{plan, Direction, MotionPlan, MAX_STEPS, POSITIONS};
pub use speed::SpeedPolicy;

//! Carousel configuration - root configuration structure.

use serde::Deserialize;

use super::motor::MotorWiring;
use super::speed::SpeedTable;
use super::timing::TimingConfig;

/// Root configuration structure from TOML.
///
/// Every section is optional and falls back to its defaults.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Item-count to duty table.
    pub speed: SpeedTable,

    /// Brake, rest and sensor-wait timing.
    pub timing: TimingConfig,

    /// H-bridge wiring.
    pub motor: MotorWiring,
}

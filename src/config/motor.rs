//! Motor wiring configuration from TOML.

use serde::Deserialize;

/// H-bridge wiring options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct MotorWiring {
    /// Swap the forward and reverse direction outputs.
    ///
    /// The position sensors stay bound to the logical direction.
    pub invert_direction: bool,
}

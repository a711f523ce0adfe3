use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::eval::DEFAULT_DENSITY_PLACEHOLDER;

/// Parameters of the engine shared by every placement strategy.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    /// Base aisle width used in the clearance requirement between two racks
    pub min_aisle_width: f64,
    /// Constant standing in for the density term of the total score, see [`crate::eval::Scorer`]
    #[serde(default = "default_density_placeholder")]
    pub density_placeholder: f64,
}

fn default_density_placeholder() -> f64 {
    DEFAULT_DENSITY_PLACEHOLDER
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.min_aisle_width.is_finite() && self.min_aisle_width >= 0.0,
            "min_aisle_width must be a non-negative number, got {}",
            self.min_aisle_width
        );
        ensure!(
            (0.0..=1.0).contains(&self.density_placeholder),
            "density_placeholder must lie in [0, 1], got {}",
            self.density_placeholder
        );
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_aisle_width: 6.0,
            density_placeholder: DEFAULT_DENSITY_PLACEHOLDER,
        }
    }
}

use dm_core::{BorderMode, Error, Result, Rgba};
use dm_edge::DEFAULT_EDGE_THRESHOLD;
use serde::{Deserialize, Serialize};

use crate::color::ColorMode;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MosaicConfig {
    pub blur_kernel_size: usize,
    pub edge_kernel_size: usize,
    /// Minimum red value of an edge-filtered pixel to become a feature point.
    pub threshold: u8,
    /// Fraction of feature points used as triangulation sites. Rates outside
    /// `(0, 1]` sample nothing.
    pub sample_rate: f64,
    pub color_mode: ColorMode,
    pub border: BorderMode<Rgba>,
    /// Fixed seed for a reproducible mosaic; `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            blur_kernel_size: 5,
            edge_kernel_size: 5,
            threshold: DEFAULT_EDGE_THRESHOLD,
            sample_rate: 0.03,
            color_mode: ColorMode::Quick,
            border: BorderMode::Clamp,
            seed: None,
        }
    }
}

impl MosaicConfig {
    /// Rejects kernel sizes the edge filters cannot build.
    pub fn validate(&self) -> Result<()> {
        for (name, size) in [
            ("blur_kernel_size", self.blur_kernel_size),
            ("edge_kernel_size", self.edge_kernel_size),
        ] {
            if size % 2 == 0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be odd and positive, got {size}"
                )));
            }
        }
        Ok(())
    }
}

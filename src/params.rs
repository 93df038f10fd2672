//! Filter parameters.
//!
//! Defaults reproduce the reference look of each filter. All structs
//! deserialize with `#[serde(default)]`, so a partial config only needs the
//! fields it changes.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Parameters of the cartoon stylizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylizeParams {
    /// Bilateral window diameter in pixels (radius = diameter / 2)
    pub diameter: usize,
    /// Bilateral fall-off in the intensity domain
    pub sigma_color: f32,
    /// Bilateral fall-off in the spatial domain
    pub sigma_space: f32,
    /// Median aperture applied to the grayscale image (odd)
    pub median_aperture: usize,
    /// Neighborhood size of the adaptive threshold (odd, >= 3)
    pub threshold_block: usize,
    /// Constant subtracted from the local mean
    pub threshold_c: f32,
}

impl Default for StylizeParams {
    fn default() -> Self {
        Self {
            diameter: 9,
            sigma_color: 75.0,
            sigma_space: 75.0,
            median_aperture: 7,
            threshold_block: 9,
            threshold_c: 9.0,
        }
    }
}

impl StylizeParams {
    pub fn validate(&self) -> Result<()> {
        if self.diameter == 0 {
            return Err(Error::parameter("diameter", self.diameter));
        }
        if !(self.sigma_color.is_finite() && self.sigma_color > 0.0) {
            return Err(Error::parameter("sigma_color", self.sigma_color));
        }
        if !(self.sigma_space.is_finite() && self.sigma_space > 0.0) {
            return Err(Error::parameter("sigma_space", self.sigma_space));
        }
        if self.median_aperture % 2 == 0 {
            return Err(Error::parameter("median_aperture", self.median_aperture));
        }
        if self.threshold_block < 3 || self.threshold_block % 2 == 0 {
            return Err(Error::parameter("threshold_block", self.threshold_block));
        }
        if !self.threshold_c.is_finite() {
            return Err(Error::parameter("threshold_c", self.threshold_c));
        }
        Ok(())
    }
}

/// Parameters of the halftoner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HalftoneParams {
    /// Edge length of a square tile
    pub block_size: usize,
    /// Tiles whose mean is strictly above this become white
    pub threshold: u8,
}

impl Default for HalftoneParams {
    fn default() -> Self {
        Self {
            block_size: 8,
            threshold: 127,
        }
    }
}

impl HalftoneParams {
    pub fn with_block_size(block_size: usize) -> Self {
        Self {
            block_size,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.block_size == 0 {
            return Err(Error::InvalidBlockSize {
                block_size: self.block_size,
            });
        }
        Ok(())
    }
}

/// Parameters of the blender.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendParams {
    /// Weight of the first image, in [0, 1]
    pub alpha: f32,
    /// Common width both inputs are resized to
    pub width: usize,
    /// Common height both inputs are resized to
    pub height: usize,
}

/// Canonical edge length both blend inputs are normalized to.
pub const BLEND_SIZE: usize = 500;

impl Default for BlendParams {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            width: BLEND_SIZE,
            height: BLEND_SIZE,
        }
    }
}

impl BlendParams {
    pub fn with_alpha(alpha: f32) -> Self {
        Self {
            alpha,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        // NaN fails the range check as well
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(Error::AlphaOutOfRange { alpha: self.alpha });
        }
        if self.width == 0 {
            return Err(Error::parameter("width", self.width));
        }
        if self.height == 0 {
            return Err(Error::parameter("height", self.height));
        }
        Ok(())
    }
}

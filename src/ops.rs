//! Capability interface over the vectorized primitives the transforms need.
//!
//! The transforms in [`crate::filters`] only talk to an [`ImageOps`], so a
//! different numeric backend (SIMD, GPU, another imaging library) can be
//! swapped in without touching the transform logic. [`NativeOps`] is the
//! built-in implementation on top of ndarray, rayon and fast_image_resize.

use ndarray::{Array3, ArrayView3};

use crate::error::Result;
use crate::filters::{blend, blur, color, resize, threshold};

/// Image primitives used by the stylizer, halftoner and blender.
///
/// All images are `(height, width, channels)` u8 arrays. Every method returns
/// a new array and leaves its inputs untouched.
pub trait ImageOps {
    /// Edge-preserving smoothing over a circular window of `diameter`.
    fn bilateral_smooth(
        &self,
        image: ArrayView3<u8>,
        diameter: usize,
        sigma_color: f32,
        sigma_space: f32,
    ) -> Result<Array3<u8>>;

    /// Median of an `aperture x aperture` window.
    fn median_blur(&self, image: ArrayView3<u8>, aperture: usize) -> Result<Array3<u8>>;

    /// Local-mean binarization of a gray image.
    fn adaptive_threshold(&self, gray: ArrayView3<u8>, block: usize, c: f32) -> Result<Array3<u8>>;

    /// Resample to `width x height`.
    fn resize(&self, image: ArrayView3<u8>, width: usize, height: usize) -> Result<Array3<u8>>;

    /// Convert to a single gray channel.
    fn to_grayscale(&self, image: ArrayView3<u8>) -> Result<Array3<u8>>;

    /// `round(a * alpha + b * beta)` per channel, saturated to 0-255.
    fn weighted_sum(
        &self,
        a: ArrayView3<u8>,
        alpha: f32,
        b: ArrayView3<u8>,
        beta: f32,
    ) -> Result<Array3<u8>>;
}

/// Built-in CPU backend.
///
/// `gray_weights` selects the RGB -> gray weighting used by the stylizer and
/// halftoner (BT.601 by default; BT.709, plain average or custom weights are
/// available through [`color::GrayscaleWeights`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeOps {
    pub gray_weights: color::GrayscaleWeights,
}

impl NativeOps {
    pub fn with_gray_weights(gray_weights: color::GrayscaleWeights) -> Self {
        Self { gray_weights }
    }
}

impl ImageOps for NativeOps {
    fn bilateral_smooth(
        &self,
        image: ArrayView3<u8>,
        diameter: usize,
        sigma_color: f32,
        sigma_space: f32,
    ) -> Result<Array3<u8>> {
        blur::bilateral_u8(image, diameter, sigma_color, sigma_space)
    }

    fn median_blur(&self, image: ArrayView3<u8>, aperture: usize) -> Result<Array3<u8>> {
        Ok(blur::median_u8(image, aperture))
    }

    fn adaptive_threshold(&self, gray: ArrayView3<u8>, block: usize, c: f32) -> Result<Array3<u8>> {
        threshold::adaptive_mean_u8(gray, block, c)
    }

    fn resize(&self, image: ArrayView3<u8>, width: usize, height: usize) -> Result<Array3<u8>> {
        resize::resize_bilinear_u8(image, width, height)
    }

    fn to_grayscale(&self, image: ArrayView3<u8>) -> Result<Array3<u8>> {
        color::to_grayscale_u8(image, self.gray_weights)
    }

    fn weighted_sum(
        &self,
        a: ArrayView3<u8>,
        alpha: f32,
        b: ArrayView3<u8>,
        beta: f32,
    ) -> Result<Array3<u8>> {
        blend::weighted_sum_u8(a, alpha, b, beta)
    }
}

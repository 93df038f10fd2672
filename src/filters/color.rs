//! Color-space helpers shared by all transforms.
//!
//! The transforms expect RGB channel order. Callers holding BGR data (as
//! most camera and codec stacks produce) convert with [`swap_red_blue_u8`]
//! before and after the call.
//!
//! Grayscale conversion defaults to ITU-R BT.601 luma, the weighting used by
//! common vision libraries for `RGB -> GRAY`.

use ndarray::{Array3, ArrayView3};

use crate::error::{Error, Result};

/// ITU-R BT.601 luma coefficients
const LUMA601_R: f32 = 0.299;
const LUMA601_G: f32 = 0.587;
const LUMA601_B: f32 = 0.114;

/// ITU-R BT.709 luminosity coefficients
const LUMA709_R: f32 = 0.2126;
const LUMA709_G: f32 = 0.7152;
const LUMA709_B: f32 = 0.0722;

/// Channel weights for RGB -> gray conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrayscaleWeights {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Default for GrayscaleWeights {
    fn default() -> Self {
        Self::bt601()
    }
}

impl GrayscaleWeights {
    /// BT.601 luma (default)
    pub fn bt601() -> Self {
        Self {
            r: LUMA601_R,
            g: LUMA601_G,
            b: LUMA601_B,
        }
    }

    /// BT.709 luminosity
    pub fn bt709() -> Self {
        Self {
            r: LUMA709_R,
            g: LUMA709_G,
            b: LUMA709_B,
        }
    }

    /// Simple average (R+G+B)/3
    pub fn average() -> Self {
        Self { r: 1.0 / 3.0, g: 1.0 / 3.0, b: 1.0 / 3.0 }
    }

    /// Create custom weights (normalized automatically)
    pub fn custom(r: f32, g: f32, b: f32) -> Self {
        let sum = (r + g + b).abs().max(0.001);
        Self {
            r: r / sum,
            g: g / sum,
            b: b / sum,
        }
    }

    #[inline]
    fn apply(&self, r: u8, g: u8, b: u8) -> u8 {
        (self.r * r as f32 + self.g * g as f32 + self.b * b as f32)
            .round()
            .clamp(0.0, 255.0) as u8
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Fail unless the image has at least one pixel in each dimension.
pub fn ensure_not_empty(input: &ArrayView3<u8>) -> Result<()> {
    let (height, width, channels) = input.dim();
    if height == 0 || width == 0 || channels == 0 {
        return Err(Error::EmptyImage { height, width });
    }
    Ok(())
}

/// Fail unless the channel count is one of `allowed`.
pub fn ensure_channels(
    input: &ArrayView3<u8>,
    operation: &'static str,
    allowed: &[usize],
) -> Result<usize> {
    let channels = input.dim().2;
    if !allowed.contains(&channels) {
        return Err(Error::UnsupportedChannels { operation, channels });
    }
    Ok(channels)
}

// ============================================================================
// Conversions
// ============================================================================

/// Convert an image to single-channel gray.
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
/// * `weights` - RGB weights; ignored for 1-channel input
///
/// # Returns
/// Gray image of shape (height, width, 1). Alpha is dropped.
pub fn to_grayscale_u8(input: ArrayView3<u8>, weights: GrayscaleWeights) -> Result<Array3<u8>> {
    let channels = ensure_channels(&input, "grayscale", &[1, 3, 4])?;
    let (height, width, _) = input.dim();

    if channels == 1 {
        return Ok(input.to_owned());
    }

    let mut output = Array3::<u8>::zeros((height, width, 1));
    for y in 0..height {
        for x in 0..width {
            output[[y, x, 0]] = weights.apply(
                input[[y, x, 0]],
                input[[y, x, 1]],
                input[[y, x, 2]],
            );
        }
    }
    Ok(output)
}

/// Swap the first and third channel (RGB <-> BGR, RGBA <-> BGRA).
pub fn swap_red_blue_u8(input: ArrayView3<u8>) -> Result<Array3<u8>> {
    ensure_channels(&input, "swap_red_blue", &[3, 4])?;

    let mut output = input.to_owned();
    let (height, width, _) = input.dim();
    for y in 0..height {
        for x in 0..width {
            output[[y, x, 0]] = input[[y, x, 2]];
            output[[y, x, 2]] = input[[y, x, 0]];
        }
    }
    Ok(output)
}

/// Replicate a single gray channel into RGB.
pub fn gray_to_rgb_u8(input: ArrayView3<u8>) -> Result<Array3<u8>> {
    ensure_channels(&input, "gray_to_rgb", &[1])?;

    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 3));
    for y in 0..height {
        for x in 0..width {
            let v = input[[y, x, 0]];
            output[[y, x, 0]] = v;
            output[[y, x, 1]] = v;
            output[[y, x, 2]] = v;
        }
    }
    Ok(output)
}

/// Build an owned image from a flat interleaved buffer.
///
/// # Arguments
/// * `data` - Row-major bytes, length = width * height * channels
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `channels` - Interleaved channels per pixel
pub fn image_from_raw(
    data: Vec<u8>,
    width: usize,
    height: usize,
    channels: usize,
) -> Result<Array3<u8>> {
    if data.len() != width * height * channels {
        return Err(Error::BufferSize {
            len: data.len(),
            width,
            height,
            channels,
        });
    }
    Ok(Array3::from_shape_vec((height, width, channels), data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grayscale_u8_red_bt601() {
        let mut img = Array3::<u8>::zeros((1, 1, 3));
        img[[0, 0, 0]] = 255;

        let result = to_grayscale_u8(img.view(), GrayscaleWeights::default()).unwrap();

        // 0.299 * 255 ≈ 76
        assert_eq!(result.dim(), (1, 1, 1));
        assert!((result[[0, 0, 0]] as i32 - 76).abs() <= 1);
    }

    #[test]
    fn test_grayscale_u8_green_bt709() {
        let mut img = Array3::<u8>::zeros((1, 1, 4));
        img[[0, 0, 1]] = 255;
        img[[0, 0, 3]] = 255;

        let result = to_grayscale_u8(img.view(), GrayscaleWeights::bt709()).unwrap();

        // 0.7152 * 255 ≈ 182
        assert!((result[[0, 0, 0]] as i32 - 182).abs() <= 1);
    }

    #[test]
    fn test_grayscale_white_stays_white() {
        let img = Array3::<u8>::from_elem((2, 2, 3), 255);
        let result = to_grayscale_u8(img.view(), GrayscaleWeights::default()).unwrap();
        assert!(result.iter().all(|&v| v == 255));
    }

    #[test]
    fn test_grayscale_passes_single_channel_through() {
        let img = Array3::<u8>::from_shape_fn((2, 3, 1), |(y, x, _)| (y * 3 + x) as u8);
        let result = to_grayscale_u8(img.view(), GrayscaleWeights::bt709()).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_grayscale_rejects_two_channels() {
        let img = Array3::<u8>::zeros((2, 2, 2));
        let result = to_grayscale_u8(img.view(), GrayscaleWeights::default());
        assert!(matches!(result, Err(Error::UnsupportedChannels { channels: 2, .. })));
    }

    #[test]
    fn test_custom_weights_normalized() {
        let w = GrayscaleWeights::custom(2.0, 1.0, 1.0);
        assert!((w.r + w.g + w.b - 1.0).abs() < 1e-6);
        assert!((w.r - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_swap_red_blue_keeps_alpha() {
        let mut img = Array3::<u8>::zeros((1, 1, 4));
        img[[0, 0, 0]] = 10;
        img[[0, 0, 1]] = 20;
        img[[0, 0, 2]] = 30;
        img[[0, 0, 3]] = 40;

        let result = swap_red_blue_u8(img.view()).unwrap();
        assert_eq!(result.as_slice().unwrap(), &[30, 20, 10, 40]);
    }

    #[test]
    fn test_gray_to_rgb() {
        let img = Array3::<u8>::from_elem((2, 2, 1), 77);
        let result = gray_to_rgb_u8(img.view()).unwrap();
        assert_eq!(result.dim(), (2, 2, 3));
        assert!(result.iter().all(|&v| v == 77));
    }

    #[test]
    fn test_image_from_raw_checks_length() {
        assert!(image_from_raw(vec![0; 12], 2, 2, 3).is_ok());
        assert!(matches!(
            image_from_raw(vec![0; 11], 2, 2, 3),
            Err(Error::BufferSize { len: 11, .. })
        ));
    }

    #[test]
    fn test_ensure_not_empty() {
        let img = Array3::<u8>::zeros((0, 4, 3));
        assert!(matches!(
            ensure_not_empty(&img.view()),
            Err(Error::EmptyImage { height: 0, width: 4 })
        ));
    }
}

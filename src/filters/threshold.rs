//! Adaptive (local mean) threshold.
//!
//! Unlike a global cutoff, each pixel is compared against the rounded mean
//! of its own `block x block` neighborhood. Borders are replicated.

use ndarray::{Array3, ArrayView3};

use super::color::ensure_channels;
use super::core::box_sum_u32;
use crate::error::Result;

/// Binarize a gray image against its local mean.
///
/// A pixel becomes 255 when `pixel - round(mean) > -ceil(c)`, i.e. when it
/// is brighter than the neighborhood mean minus `c`; otherwise 0.
///
/// # Arguments
/// * `input` - Gray image (height, width, 1)
/// * `block` - Odd neighborhood edge length
/// * `c` - Constant subtracted from the mean
///
/// # Returns
/// Binary mask (height, width, 1) with values 0 or 255
pub fn adaptive_mean_u8(input: ArrayView3<u8>, block: usize, c: f32) -> Result<Array3<u8>> {
    ensure_channels(&input, "adaptive_threshold", &[1])?;
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 1));

    let sums = box_sum_u32(input, 0, block);
    let area = (block * block) as f32;
    let delta = c.ceil() as i32;

    for y in 0..height {
        for x in 0..width {
            let mean = (sums[[y, x]] as f32 / area).round() as i32;
            if input[[y, x, 0]] as i32 - mean > -delta {
                output[[y, x, 0]] = 255;
            }
        }
    }

    Ok(output)
}

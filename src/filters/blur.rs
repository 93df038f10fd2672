//! Smoothing filters: Bilateral, Median.
//!
//! ## Supported Formats
//!
//! Both filters accept images with 1, 3, or 4 channels:
//! - **Grayscale**: (height, width, 1) - processes the single channel
//! - **RGB**: (height, width, 3) - processes all 3 channels
//! - **RGBA**: (height, width, 4) - processes RGB, preserves alpha

use ndarray::{Array3, ArrayView3};
use rayon::prelude::*;

use super::color::ensure_channels;
use super::core::{color_weight_table, reflect_101, replicate, spatial_taps};
use crate::error::Result;

// ============================================================================
// Bilateral
// ============================================================================

/// Edge-preserving bilateral smoothing - u8 version.
///
/// Each output pixel is the average of a circular neighborhood, weighted by
/// spatial distance and by the summed absolute difference of the color
/// channels. Flat regions blur while strong edges survive. Borders are
/// mirrored without repeating the edge pixel.
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
/// * `diameter` - Window diameter; radius = diameter / 2
/// * `sigma_color` - Range fall-off (intensity domain)
/// * `sigma_space` - Spatial fall-off
///
/// # Returns
/// Smoothed image with same shape
pub fn bilateral_u8(
    input: ArrayView3<u8>,
    diameter: usize,
    sigma_color: f32,
    sigma_space: f32,
) -> Result<Array3<u8>> {
    ensure_channels(&input, "bilateral", &[1, 3, 4])?;
    let (height, width, channels) = input.dim();
    let color_channels = if channels == 4 { 3 } else { channels };
    let row_len = width * channels;

    let taps = spatial_taps(diameter / 2, sigma_space);
    let color_weights = color_weight_table(sigma_color, color_channels);

    let mut data = vec![0u8; height * row_len];
    if row_len > 0 {
        data.par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| {
                let mut sum = [0.0f32; 3];
                for x in 0..width {
                    sum.fill(0.0);
                    let mut weight_sum = 0.0f32;

                    for &(dy, dx, spatial_weight) in &taps {
                        let sy = reflect_101(y as isize + dy, height);
                        let sx = reflect_101(x as isize + dx, width);

                        let diff: usize = (0..color_channels)
                            .map(|c| input[[sy, sx, c]].abs_diff(input[[y, x, c]]) as usize)
                            .sum();
                        let weight = spatial_weight * color_weights[diff];

                        for c in 0..color_channels {
                            sum[c] += input[[sy, sx, c]] as f32 * weight;
                        }
                        weight_sum += weight;
                    }

                    let base = x * channels;
                    for c in 0..color_channels {
                        row[base + c] = (sum[c] / weight_sum).round().clamp(0.0, 255.0) as u8;
                    }
                    if channels == 4 {
                        row[base + 3] = input[[y, x, 3]];
                    }
                }
            });
    }

    Ok(Array3::from_shape_vec((height, width, channels), data)?)
}

// ============================================================================
// Median
// ============================================================================

/// Apply median filter - u8 version.
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
/// * `aperture` - Odd window edge length; borders are replicated
///
/// # Returns
/// Median-filtered image with same channel count
pub fn median_u8(input: ArrayView3<u8>, aperture: usize) -> Array3<u8> {
    let (height, width, channels) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, channels));

    let radius = (aperture / 2) as isize;
    let mut values: Vec<u8> = Vec::with_capacity(aperture * aperture);

    let color_channels = if channels == 4 { 3 } else { channels };

    for y in 0..height {
        for x in 0..width {
            for c in 0..color_channels {
                values.clear();

                for dy in -radius..=radius {
                    let sy = replicate(y as isize + dy, height);
                    for dx in -radius..=radius {
                        let sx = replicate(x as isize + dx, width);
                        values.push(input[[sy, sx, c]]);
                    }
                }

                let mid = values.len() / 2;
                let (_, median, _) = values.select_nth_unstable(mid);
                output[[y, x, c]] = *median;
            }
            if channels == 4 {
                output[[y, x, 3]] = input[[y, x, 3]];
            }
        }
    }

    output
}

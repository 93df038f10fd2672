//! Core utilities shared by the neighborhood filters.
//!
//! This module provides:
//! - Border index mapping (replicate, reflect-101)
//! - Bilateral weight tables
//! - Separable box sums

use ndarray::{Array2, ArrayView3};

/// Map a possibly out-of-range coordinate by repeating the edge pixel.
///
/// `aaa|abcd|ddd`
#[inline]
pub fn replicate(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}

/// Map a possibly out-of-range coordinate by mirroring without repeating
/// the edge pixel.
///
/// `dcb|abcd|cba`
#[inline]
pub fn reflect_101(i: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let last = len as isize - 1;
    let period = 2 * last;
    let mut i = i.rem_euclid(period);
    if i > last {
        i = period - i;
    }
    i as usize
}

/// Spatial taps of a circular bilateral window.
///
/// # Arguments
/// * `radius` - Window radius; only offsets with distance <= radius are kept
/// * `sigma_space` - Standard deviation of the spatial Gaussian
///
/// # Returns
/// `(dy, dx, weight)` for each tap
pub fn spatial_taps(radius: usize, sigma_space: f32) -> Vec<(isize, isize, f32)> {
    let r = radius as isize;
    let coeff = -0.5 / (sigma_space * sigma_space);
    let mut taps = Vec::with_capacity((2 * radius + 1) * (2 * radius + 1));

    for dy in -r..=r {
        for dx in -r..=r {
            let dist_sq = (dy * dy + dx * dx) as f32;
            if dist_sq.sqrt() > radius as f32 {
                continue;
            }
            taps.push((dy, dx, (dist_sq * coeff).exp()));
        }
    }
    taps
}

/// Lookup table of range weights indexed by summed absolute channel difference.
///
/// # Arguments
/// * `sigma_color` - Standard deviation of the range Gaussian
/// * `channels` - Number of channels contributing to the difference
pub fn color_weight_table(sigma_color: f32, channels: usize) -> Vec<f32> {
    let coeff = -0.5 / (sigma_color * sigma_color);
    (0..=255 * channels)
        .map(|d| {
            let d = d as f32;
            (d * d * coeff).exp()
        })
        .collect()
}

/// Sum of a `size x size` window around every pixel of one channel, with
/// replicated borders.
///
/// Uses separable horizontal and vertical passes.
pub fn box_sum_u32(input: ArrayView3<u8>, channel: usize, size: usize) -> Array2<u32> {
    let (height, width, _) = input.dim();
    let half = (size / 2) as isize;

    let mut temp = Array2::<u32>::zeros((height, width));
    let mut result = Array2::<u32>::zeros((height, width));

    // Horizontal pass
    for y in 0..height {
        for x in 0..width {
            let mut sum = 0u32;
            for k in -half..=half {
                let sx = replicate(x as isize + k, width);
                sum += input[[y, sx, channel]] as u32;
            }
            temp[[y, x]] = sum;
        }
    }

    // Vertical pass
    for y in 0..height {
        for x in 0..width {
            let mut sum = 0u32;
            for k in -half..=half {
                let sy = replicate(y as isize + k, height);
                sum += temp[[sy, x]];
            }
            result[[y, x]] = sum;
        }
    }

    result
}

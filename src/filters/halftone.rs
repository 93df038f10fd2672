//! Block halftoning.
//!
//! The gray image is cut into non-overlapping `block x block` tiles, and
//! every tile becomes solid white or solid black depending on its mean
//! intensity. Trailing rows and columns that do not fill a whole tile are
//! dropped, so the output is `(H - H % block) x (W - W % block)`.
//!
//! An input smaller than one tile in either dimension yields an empty
//! (zero-sized) image rather than an error.

use ndarray::{Array3, ArrayView3};
use rayon::prelude::*;
use tracing::debug;

use super::color::{ensure_channels, ensure_not_empty};
use crate::error::Result;
use crate::ops::{ImageOps, NativeOps};
use crate::params::HalftoneParams;

/// Halftone an image using the given backend for gray conversion.
///
/// # Arguments
/// * `ops` - Backend providing the grayscale conversion
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
/// * `params` - Tile size and threshold
///
/// # Returns
/// Gray image (H - H % block, W - W % block, 1) containing only 0 and 255
pub fn halftone_with<O: ImageOps + ?Sized>(
    ops: &O,
    input: ArrayView3<u8>,
    params: &HalftoneParams,
) -> Result<Array3<u8>> {
    params.validate()?;
    ensure_not_empty(&input)?;
    let channels = ensure_channels(&input, "halftone", &[1, 3, 4])?;

    let converted;
    let gray = if channels == 1 {
        input.view()
    } else {
        converted = ops.to_grayscale(input)?;
        converted.view()
    };

    let block = params.block_size;
    let (height, width, _) = gray.dim();
    let out_h = height - height % block;
    let out_w = width - width % block;

    if out_h == 0 || out_w == 0 {
        debug!(
            "Halftone input {}x{} is smaller than block {}; returning empty {}x{} image",
            width, height, block, out_w, out_h
        );
        return Ok(Array3::<u8>::zeros((out_h, out_w, 1)));
    }

    debug!(
        "Halftoning {}x{} -> {}x{} with block {}",
        width, height, out_w, out_h, block
    );

    // mean > threshold  <=>  sum > threshold * area, kept in integers
    let cutoff = params.threshold as u64 * (block * block) as u64;
    let band_len = block * out_w;

    let mut data = vec![0u8; out_h * out_w];
    data.par_chunks_mut(band_len)
        .enumerate()
        .for_each(|(band, rows)| {
            let y0 = band * block;
            for bx in 0..out_w / block {
                let x0 = bx * block;
                let mut sum = 0u64;
                for y in y0..y0 + block {
                    for x in x0..x0 + block {
                        sum += gray[[y, x, 0]] as u64;
                    }
                }

                let value = if sum > cutoff { 255 } else { 0 };
                for dy in 0..block {
                    let start = dy * out_w + x0;
                    rows[start..start + block].fill(value);
                }
            }
        });

    Ok(Array3::from_shape_vec((out_h, out_w, 1), data)?)
}

/// Halftone with BT.601 gray conversion and the default threshold.
pub fn halftone_u8(input: ArrayView3<u8>, block_size: usize) -> Result<Array3<u8>> {
    halftone_with(
        &NativeOps::default(),
        input,
        &HalftoneParams::with_block_size(block_size),
    )
}

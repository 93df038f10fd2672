//! Alpha blending of two images.
//!
//! Inputs of any size are first normalized to one canonical size (500x500 by
//! default), then combined per channel as `alpha * a + (1 - alpha) * b`.
//!
//! Both inputs must share a channel count; a gray + color pair is rejected
//! rather than silently broadcast. Use [`super::color::gray_to_rgb_u8`] to
//! promote the gray image first.

use ndarray::{Array3, ArrayView3, Zip};
use tracing::debug;

use super::color::{ensure_channels, ensure_not_empty};
use crate::error::{Error, Result};
use crate::ops::{ImageOps, NativeOps};
use crate::params::BlendParams;

/// Per-pixel weighted sum of two equally shaped images - u8 version.
///
/// # Arguments
/// * `a` - First image (height, width, channels)
/// * `alpha` - Weight of `a`
/// * `b` - Second image, same shape as `a`
/// * `beta` - Weight of `b`
///
/// # Returns
/// `round(a * alpha + b * beta)` clamped to 0-255
pub fn weighted_sum_u8(
    a: ArrayView3<u8>,
    alpha: f32,
    b: ArrayView3<u8>,
    beta: f32,
) -> Result<Array3<u8>> {
    if a.dim() != b.dim() {
        return Err(Error::DimensionMismatch {
            left: a.dim(),
            right: b.dim(),
        });
    }

    let mut output = Array3::<u8>::zeros(a.dim());
    Zip::from(&mut output).and(&a).and(&b).for_each(|o, &pa, &pb| {
        *o = (pa as f32 * alpha + pb as f32 * beta).round().clamp(0.0, 255.0) as u8;
    });
    Ok(output)
}

/// Resize both images to the configured size and blend them.
///
/// # Arguments
/// * `ops` - Backend providing resize and weighted sum
/// * `a` - First image (1, 3, or 4 channels)
/// * `b` - Second image, same channel count as `a`
/// * `params` - Weight of `a` and the common output size
///
/// # Returns
/// Image of shape (params.height, params.width, channels)
pub fn blend_with<O: ImageOps + ?Sized>(
    ops: &O,
    a: ArrayView3<u8>,
    b: ArrayView3<u8>,
    params: &BlendParams,
) -> Result<Array3<u8>> {
    params.validate()?;
    ensure_not_empty(&a)?;
    ensure_not_empty(&b)?;
    let channels_a = ensure_channels(&a, "blend", &[1, 3, 4])?;
    let channels_b = ensure_channels(&b, "blend", &[1, 3, 4])?;
    if channels_a != channels_b {
        return Err(Error::ChannelMismatch {
            left: channels_a,
            right: channels_b,
        });
    }

    debug!(
        "Blending {:?} with {:?} at alpha={} into {}x{}",
        a.dim(),
        b.dim(),
        params.alpha,
        params.width,
        params.height
    );

    let resized_a = ops.resize(a, params.width, params.height)?;
    let resized_b = ops.resize(b, params.width, params.height)?;
    ops.weighted_sum(
        resized_a.view(),
        params.alpha,
        resized_b.view(),
        1.0 - params.alpha,
    )
}

/// Blend two images at the canonical 500x500 size.
pub fn blend_u8(a: ArrayView3<u8>, b: ArrayView3<u8>, alpha: f32) -> Result<Array3<u8>> {
    blend_with(&NativeOps::default(), a, b, &BlendParams::with_alpha(alpha))
}

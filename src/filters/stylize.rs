//! Cartoon stylization.
//!
//! Flattens color regions with an edge-preserving smoothing pass and draws
//! dark outlines where a local-mean threshold of the (median-blurred) gray
//! image finds edges:
//!
//! 1. bilateral smoothing of the color image
//! 2. gray conversion of the original image
//! 3. median blur of the gray image
//! 4. adaptive mean threshold -> binary edge mask
//! 5. smoothed color where the mask is white, black elsewhere
//!
//! ## Supported Formats
//!
//! - **RGB**: (height, width, 3)
//! - **RGBA**: (height, width, 4) - alpha is copied from the input

use ndarray::{Array3, ArrayView3};
use tracing::debug;

use super::color::{ensure_channels, ensure_not_empty};
use crate::error::Result;
use crate::ops::{ImageOps, NativeOps};
use crate::params::StylizeParams;

/// Cartoon-stylize a color image using the given backend.
///
/// # Arguments
/// * `ops` - Backend providing the smoothing, blur and threshold primitives
/// * `input` - RGB or RGBA image (height, width, channels)
/// * `params` - Filter parameters
///
/// # Returns
/// Stylized image with the same shape as `input`
pub fn stylize_with<O: ImageOps + ?Sized>(
    ops: &O,
    input: ArrayView3<u8>,
    params: &StylizeParams,
) -> Result<Array3<u8>> {
    params.validate()?;
    ensure_not_empty(&input)?;
    let channels = ensure_channels(&input, "stylize", &[3, 4])?;

    let (height, width, _) = input.dim();
    debug!("Stylizing {}x{} ({} channels)", width, height, channels);

    let mut output = ops.bilateral_smooth(
        input,
        params.diameter,
        params.sigma_color,
        params.sigma_space,
    )?;

    let gray = ops.to_grayscale(input)?;
    let blurred = ops.median_blur(gray.view(), params.median_aperture)?;
    let edges = ops.adaptive_threshold(
        blurred.view(),
        params.threshold_block,
        params.threshold_c,
    )?;

    // Masked copy: keep smoothed color on white mask pixels, zero the rest
    for y in 0..height {
        for x in 0..width {
            if edges[[y, x, 0]] == 0 {
                for c in 0..3 {
                    output[[y, x, c]] = 0;
                }
            }
        }
    }

    Ok(output)
}

/// Cartoon-stylize with the default parameters.
pub fn stylize_u8(input: ArrayView3<u8>) -> Result<Array3<u8>> {
    stylize_with(&NativeOps::default(), input, &StylizeParams::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_stylize_u8_uniform_unchanged() {
        let img = Array3::<u8>::from_shape_fn((12, 10, 3), |(_, _, c)| [90, 140, 30][c]);
        let result = stylize_u8(img.view()).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_stylize_u8_draws_dark_outline() {
        let img = Array3::<u8>::from_shape_fn((24, 32, 3), |(_, x, _)| if x < 16 { 20 } else { 230 });

        let result = stylize_u8(img.view()).unwrap();

        assert_eq!(result.dim(), (24, 32, 3));
        // Dark side of the edge becomes an outline
        assert_eq!(result[[12, 15, 0]], 0);
        assert_eq!(result[[12, 15, 1]], 0);
        assert_eq!(result[[12, 15, 2]], 0);
        // Flat regions keep their (smoothed) color
        assert_eq!(result[[12, 2, 0]], 20);
        assert_eq!(result[[12, 29, 0]], 230);
    }

    #[test]
    fn test_stylize_u8_preserves_alpha() {
        let mut img = Array3::<u8>::from_elem((10, 10, 4), 120);
        for y in 0..10 {
            for x in 0..10 {
                img[[y, x, 3]] = 33;
            }
        }

        let result = stylize_u8(img.view()).unwrap();

        assert!(result.exact_chunks((1, 1, 4)).into_iter().all(|px| px[[0, 0, 3]] == 33));
    }

    #[test]
    fn test_stylize_u8_rejects_gray() {
        let img = Array3::<u8>::zeros((4, 4, 1));
        assert!(matches!(
            stylize_u8(img.view()),
            Err(Error::UnsupportedChannels { channels: 1, .. })
        ));
    }

    #[test]
    fn test_stylize_u8_rejects_empty() {
        let img = Array3::<u8>::zeros((0, 0, 3));
        assert!(matches!(stylize_u8(img.view()), Err(Error::EmptyImage { .. })));
    }

    #[test]
    fn test_stylize_u8_single_pixel() {
        let img = Array3::<u8>::from_elem((1, 1, 3), 77);
        let result = stylize_u8(img.view()).unwrap();
        assert_eq!(result.dim(), (1, 1, 3));
    }
}

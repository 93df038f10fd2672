//! WebAssembly exports for the CreArt filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Images travel
//! as flat interleaved byte buffers (length = width * height * channels,
//! RGB order for color).

use wasm_bindgen::prelude::*;

use crate::filters::color::{gray_to_rgb_u8, image_from_raw, swap_red_blue_u8};
use crate::filters::{blend, halftone, stylize};

fn js_error(err: crate::Error) -> JsError {
    JsError::new(&err.to_string())
}

// ============================================================================
// Transforms
// ============================================================================

/// Cartoon-stylize an RGB/RGBA image.
///
/// # Arguments
/// * `data` - Flat array of bytes (length = width * height * channels)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `channels` - 3 or 4
///
/// # Returns
/// Flat array with the same layout as the input
#[wasm_bindgen]
pub fn stylize_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
) -> Result<Vec<u8>, JsError> {
    let input = image_from_raw(data.to_vec(), width, height, channels).map_err(js_error)?;
    let result = stylize::stylize_u8(input.view()).map_err(js_error)?;
    Ok(result.into_raw_vec_and_offset().0)
}

/// Halftone an image into solid tiles.
///
/// # Returns
/// Flat single-channel array of
/// `(height - height % block_size) * (width - width % block_size)` bytes
#[wasm_bindgen]
pub fn halftone_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    block_size: usize,
) -> Result<Vec<u8>, JsError> {
    let input = image_from_raw(data.to_vec(), width, height, channels).map_err(js_error)?;
    let result = halftone::halftone_u8(input.view(), block_size).map_err(js_error)?;
    Ok(result.into_raw_vec_and_offset().0)
}

/// Blend two images of the same channel count at 500x500.
///
/// # Returns
/// Flat array of 500 * 500 * channels bytes
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn blend_wasm(
    data_a: &[u8],
    width_a: usize,
    height_a: usize,
    data_b: &[u8],
    width_b: usize,
    height_b: usize,
    channels: usize,
    alpha: f32,
) -> Result<Vec<u8>, JsError> {
    let a = image_from_raw(data_a.to_vec(), width_a, height_a, channels).map_err(js_error)?;
    let b = image_from_raw(data_b.to_vec(), width_b, height_b, channels).map_err(js_error)?;
    let result = blend::blend_u8(a.view(), b.view(), alpha).map_err(js_error)?;
    Ok(result.into_raw_vec_and_offset().0)
}

// ============================================================================
// Color helpers
// ============================================================================

/// Convert between RGB(A) and BGR(A) channel order.
#[wasm_bindgen]
pub fn swap_red_blue_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
) -> Result<Vec<u8>, JsError> {
    let input = image_from_raw(data.to_vec(), width, height, channels).map_err(js_error)?;
    let result = swap_red_blue_u8(input.view()).map_err(js_error)?;
    Ok(result.into_raw_vec_and_offset().0)
}

/// Expand a single-channel image to RGB.
#[wasm_bindgen]
pub fn gray_to_rgb_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    let input = image_from_raw(data.to_vec(), width, height, 1).map_err(js_error)?;
    let result = gray_to_rgb_u8(input.view()).map_err(js_error)?;
    Ok(result.into_raw_vec_and_offset().0)
}

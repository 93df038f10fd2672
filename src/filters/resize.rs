//! Bilinear resampling backed by `fast_image_resize`.

use fast_image_resize::{images::Image, FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use ndarray::{Array3, ArrayView3};
use tracing::debug;

use super::color::{ensure_channels, ensure_not_empty};
use crate::error::{Error, Result};

fn pixel_type(channels: usize) -> Option<PixelType> {
    match channels {
        1 => Some(PixelType::U8),
        3 => Some(PixelType::U8x3),
        4 => Some(PixelType::U8x4),
        _ => None,
    }
}

/// Resize an image to `width x height` with bilinear interpolation.
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
///
/// # Returns
/// Resized image with the same channel count
pub fn resize_bilinear_u8(input: ArrayView3<u8>, width: usize, height: usize) -> Result<Array3<u8>> {
    ensure_not_empty(&input)?;
    let channels = ensure_channels(&input, "resize", &[1, 3, 4])?;
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage { height, width });
    }
    let pixel_type = pixel_type(channels).ok_or(Error::UnsupportedChannels {
        operation: "resize",
        channels,
    })?;

    let (src_rows, src_cols, _) = input.dim();
    debug!(
        "Resizing {}x{} -> {}x{} ({} channel(s))",
        src_cols, src_rows, width, height, channels
    );

    // Logical iteration order is row-major regardless of the view's strides
    let src_data: Vec<u8> = input.iter().copied().collect();
    let src_image = Image::from_vec_u8(src_cols as u32, src_rows as u32, src_data, pixel_type)
        .map_err(Error::resize)?;
    let mut dst_image = Image::new(width as u32, height as u32, pixel_type);

    // Channels are resampled independently; premultiplying by alpha would
    // erase the color of transparent pixels
    let resize_options = ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(FilterType::Bilinear))
        .use_alpha(false);
    let mut resizer = Resizer::new();
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    Ok(Array3::from_shape_vec(
        (height, width, channels),
        dst_image.into_vec(),
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_u8_solid_color_stays_solid() {
        let mut img = Array3::<u8>::zeros((7, 13, 3));
        for y in 0..7 {
            for x in 0..13 {
                img[[y, x, 0]] = 200;
                img[[y, x, 2]] = 35;
            }
        }

        let result = resize_bilinear_u8(img.view(), 20, 10).unwrap();

        assert_eq!(result.dim(), (10, 20, 3));
        for y in 0..10 {
            for x in 0..20 {
                assert_eq!(result[[y, x, 0]], 200);
                assert_eq!(result[[y, x, 1]], 0);
                assert_eq!(result[[y, x, 2]], 35);
            }
        }
    }

    #[test]
    fn test_resize_u8_rgba_keeps_transparent_color() {
        let img = Array3::<u8>::from_shape_fn((6, 6, 4), |(_, _, c)| [200, 100, 50, 0][c]);

        let result = resize_bilinear_u8(img.view(), 12, 9).unwrap();

        assert_eq!(result.dim(), (9, 12, 4));
        for px in result.exact_chunks((1, 1, 4)) {
            let px: Vec<u8> = px.iter().copied().collect();
            assert_eq!(px, [200, 100, 50, 0]);
        }
    }

    #[test]
    fn test_resize_u8_gray_shape() {
        let img = Array3::<u8>::from_shape_fn((30, 40, 1), |(y, x, _)| ((x + y) * 3) as u8);
        let result = resize_bilinear_u8(img.view(), 8, 6).unwrap();
        assert_eq!(result.dim(), (6, 8, 1));
    }

    #[test]
    fn test_resize_u8_keeps_gradient_order() {
        let img = Array3::<u8>::from_shape_fn((4, 64, 1), |(_, x, _)| (x * 4) as u8);
        let result = resize_bilinear_u8(img.view(), 16, 4).unwrap();
        for x in 1..16 {
            assert!(result[[2, x, 0]] >= result[[2, x - 1, 0]]);
        }
    }

    #[test]
    fn test_resize_u8_rejects_empty() {
        let img = Array3::<u8>::zeros((0, 5, 3));
        assert!(matches!(
            resize_bilinear_u8(img.view(), 10, 10),
            Err(Error::EmptyImage { .. })
        ));

        let img = Array3::<u8>::zeros((5, 5, 3));
        assert!(resize_bilinear_u8(img.view(), 0, 10).is_err());
    }
}

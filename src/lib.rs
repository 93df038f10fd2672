//! CreArt image filters
//!
//! Three stateless transforms over 8-bit images, with optional Python
//! bindings via PyO3 and WASM bindings for JavaScript:
//!
//! - [`stylize`]: cartoon look from bilateral smoothing and adaptive-threshold outlines
//! - [`halftone`]: block-mean binary tiles
//! - [`blend`]: resize two images to 500x500 and mix them with a weight
//!
//! ## Image Format
//! Images are `ndarray` arrays of shape (height, width, channels):
//! - **Grayscale**: (height, width, 1) - single channel
//! - **RGB**: (height, width, 3) - 3 color channels
//! - **RGBA**: (height, width, 4) - 3 color channels + alpha
//!
//! Color channels are expected in RGB order; use
//! [`filters::color::swap_red_blue_u8`] to convert BGR data on the way in
//! and out.
//!
//! Every transform borrows its input and returns a newly allocated image.
//! Invalid input (empty images, zero block size, out-of-range blend weight,
//! mismatched channel counts) is reported as an [`Error`].

pub mod error;
pub mod filters;
pub mod ops;
pub mod params;
pub mod preset;

#[cfg(feature = "wasm")]
pub mod wasm;

use ndarray::{Array3, ArrayView3};

pub use error::{Error, ErrorKind, Result};
pub use filters::color::{image_from_raw, GrayscaleWeights};
pub use ops::{ImageOps, NativeOps};
pub use params::{BlendParams, HalftoneParams, StylizeParams, BLEND_SIZE};
pub use preset::Filter;

/// Cartoon-stylize an RGB(A) image with the default parameters.
pub fn stylize(image: ArrayView3<u8>) -> Result<Array3<u8>> {
    filters::stylize::stylize_u8(image)
}

/// Halftone an image into `block_size` tiles. Returns a (H', W', 1) image.
pub fn halftone(image: ArrayView3<u8>, block_size: usize) -> Result<Array3<u8>> {
    filters::halftone::halftone_u8(image, block_size)
}

/// Blend two images at 500x500; `alpha` is the weight of `a`.
pub fn blend(a: ArrayView3<u8>, b: ArrayView3<u8>, alpha: f32) -> Result<Array3<u8>> {
    filters::blend::blend_u8(a, b, alpha)
}

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::prelude::*;

    use crate::filters::{blend, color, halftone, stylize};

    /// Cartoon-stylize an RGB/RGBA u8 image.
    #[pyfunction(name = "stylize")]
    pub fn stylize_py<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = stylize::stylize_u8(image.as_array())?;
        Ok(result.into_pyarray(py))
    }

    /// Halftone an image into solid black/white tiles.
    ///
    /// Output shape is (H - H % block_size, W - W % block_size, 1).
    #[pyfunction(name = "halftone")]
    #[pyo3(signature = (image, block_size=8))]
    pub fn halftone_py<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        block_size: usize,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = halftone::halftone_u8(image.as_array(), block_size)?;
        Ok(result.into_pyarray(py))
    }

    /// Resize both images to 500x500 and blend with weight `alpha` for the first.
    #[pyfunction(name = "blend")]
    #[pyo3(signature = (image_a, image_b, alpha=0.5))]
    pub fn blend_py<'py>(
        py: Python<'py>,
        image_a: PyReadonlyArray3<'py, u8>,
        image_b: PyReadonlyArray3<'py, u8>,
        alpha: f32,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = blend::blend_u8(image_a.as_array(), image_b.as_array(), alpha)?;
        Ok(result.into_pyarray(py))
    }

    /// Convert between RGB and BGR channel order.
    #[pyfunction]
    pub fn swap_red_blue<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = color::swap_red_blue_u8(image.as_array())?;
        Ok(result.into_pyarray(py))
    }

    /// Expand a (H, W, 1) gray image to RGB.
    #[pyfunction]
    pub fn gray_to_rgb<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = color::gray_to_rgb_u8(image.as_array())?;
        Ok(result.into_pyarray(py))
    }

    /// CreArt Rust extension module
    #[pymodule]
    pub fn creart(m: &Bound<'_, PyModule>) -> PyResult<()> {
        // Transforms
        m.add_function(wrap_pyfunction!(stylize_py, m)?)?;
        m.add_function(wrap_pyfunction!(halftone_py, m)?)?;
        m.add_function(wrap_pyfunction!(blend_py, m)?)?;

        // Color helpers
        m.add_function(wrap_pyfunction!(swap_red_blue, m)?)?;
        m.add_function(wrap_pyfunction!(gray_to_rgb, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::creart;

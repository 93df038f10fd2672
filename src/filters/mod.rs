//! Filter modules for image processing effects.
//!
//! ## Supported Formats
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | Grayscale8 | (H, W, 1) | u8 | Single luminance channel, 0-255 |
//! | RGB8 | (H, W, 3) | u8 | Red, green, blue, 0-255 |
//! | RGBA8 | (H, W, 4) | u8 | RGB + alpha, 0-255 |
//!
//! Color images are expected in RGB order.
//!
//! ## Transforms
//!
//! - **stylize**: bilateral smoothing + adaptive-threshold outlines (RGB/RGBA)
//! - **halftone**: block-mean binary tiles (any format, gray output)
//! - **blend**: resize to a common size + weighted sum (matching formats)
//!
//! ## Primitives
//!
//! - **blur**: bilateral, median
//! - **threshold**: adaptive mean threshold
//! - **resize**: bilinear resampling
//! - **color**: grayscale, RGB/BGR swap, gray -> RGB, validation

pub mod color;
pub mod core;
pub mod blur;
pub mod threshold;
pub mod resize;

pub mod stylize;
pub mod halftone;
pub mod blend;

use ndarray::Array3;

/// Image where every pixel has the same value in every channel.
pub fn uniform(height: usize, width: usize, channels: usize, value: u8) -> Array3<u8> {
    Array3::from_elem((height, width, channels), value)
}

/// RGB image filled with one color.
pub fn solid_rgb(height: usize, width: usize, rgb: [u8; 3]) -> Array3<u8> {
    Array3::from_shape_fn((height, width, 3), |(_, _, c)| rgb[c])
}

/// Deterministic pseudo-random image (MINSTD LCG) for shape/range properties.
pub fn noise(height: usize, width: usize, channels: usize, seed: u64) -> Array3<u8> {
    let mut state = seed.wrapping_add(1);
    Array3::from_shape_fn((height, width, channels), |_| {
        state = state.wrapping_mul(48271) % 2147483647;
        (state >> 7) as u8
    })
}

/// Smooth diagonal gradient with a bright disc, resembling a simple photo.
pub fn scene_rgb(height: usize, width: usize) -> Array3<u8> {
    let (cy, cx) = (height as f32 / 2.0, width as f32 / 2.0);
    let radius = height.min(width) as f32 / 4.0;
    Array3::from_shape_fn((height, width, 3), |(y, x, c)| {
        let dist = ((y as f32 - cy).powi(2) + (x as f32 - cx).powi(2)).sqrt();
        if dist < radius {
            [240, 200, 40][c]
        } else {
            let t = (x + y) as f32 / (width + height) as f32;
            (t * [120.0, 180.0, 255.0][c]) as u8
        }
    })
}

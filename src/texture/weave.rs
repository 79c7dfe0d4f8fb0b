//! Checkerboard weave layer.

use image::{Rgba, RgbaImage};

const EVEN_ALPHA: u8 = 15;
const ODD_ALPHA: u8 = 8;

/// Tile a black checkerboard of `scale`-sized blocks, alternating between two
/// faint alpha levels by block parity. `scale` must be non-zero.
#[must_use]
pub fn weave_grid(width: u32, height: u32, scale: u32) -> RgbaImage {
    let scale = scale.max(1);
    RgbaImage::from_fn(width, height, |x, y| {
        let alpha = if (x / scale + y / scale) % 2 == 0 {
            EVEN_ALPHA
        } else {
            ODD_ALPHA
        };
        Rgba([0, 0, 0, alpha])
    })
}

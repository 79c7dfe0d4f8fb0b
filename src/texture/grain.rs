//! Directional grain lines.

use image::{Rgba, RgbaImage};
use rand::Rng;

const ROW_SPACING: usize = 6;
const COLUMN_SPACING: usize = 8;

/// Draw faint white horizontal lines and then faint black vertical lines,
/// each line with its own random alpha, on a transparent layer.
#[must_use]
pub fn grain_lines<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> RgbaImage {
    let mut grain = RgbaImage::new(width, height);

    for y in (0..height).step_by(ROW_SPACING) {
        let line = Rgba([255, 255, 255, rng.random_range(5..=15)]);
        for x in 0..width {
            grain.put_pixel(x, y, line);
        }
    }

    for x in (0..width).step_by(COLUMN_SPACING) {
        let line = Rgba([0, 0, 0, rng.random_range(3..=12)]);
        for y in 0..height {
            grain.put_pixel(x, y, line);
        }
    }

    grain
}

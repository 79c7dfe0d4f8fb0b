//! Built-in 5x7 bitmap font, used when no font file can be loaded.
//!
//! Covers digits, Latin capitals, and the punctuation that appears in the
//! sample artwork. Lowercase letters render as capitals and anything else as
//! a hollow box.

use image::RgbaImage;

use super::{fill_rect, TextStyle};

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
const ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Rows of a glyph, top to bottom; bit 4 is the leftmost column.
type Glyph = [u8; GLYPH_HEIGHT as usize];

const MISSING: Glyph = [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F];

#[allow(clippy::match_same_arms)]
const fn glyph(c: char) -> Glyph {
    match c.to_ascii_uppercase() {
        ' ' => [0x00; 7],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '+' => [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00],
        '#' => [0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A],
        '\'' => [0x0C, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00],
        '(' => [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02],
        ')' => [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08],
        '/' => [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '?' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
        '%' => [0x18, 0x19, 0x02, 0x04, 0x08, 0x13, 0x03],
        '&' => [0x0C, 0x12, 0x14, 0x08, 0x15, 0x12, 0x0D],
        '\u{2022}' => [0x00, 0x00, 0x0E, 0x0E, 0x0E, 0x00, 0x00],
        _ => MISSING,
    }
}

/// Integer magnification for a requested pixel size.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn magnification(size: f32) -> u32 {
    // Safe: clamped to a small positive range before casting
    (size / 10.0).floor().clamp(1.0, 16.0) as u32
}

pub(super) fn measure(text: &str, size: f32) -> (u32, u32) {
    let scale = magnification(size);
    let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    let width = match chars {
        0 => 0,
        n => (n.saturating_mul(ADVANCE) - 1).saturating_mul(scale),
    };
    (width, GLYPH_HEIGHT * scale)
}

pub(super) fn draw(canvas: &mut RgbaImage, text: &str, x: i32, y: i32, style: TextStyle) {
    let scale = magnification(style.size);
    let offset = |cells: u32| i32::try_from(cells.saturating_mul(scale)).unwrap_or(i32::MAX);
    let step = offset(ADVANCE);

    let mut pen_x = x;
    for c in text.chars() {
        for (row, bits) in (0u32..).zip(glyph(c)) {
            for col in 0..GLYPH_WIDTH {
                if bits & (0x10 >> col) == 0 {
                    continue;
                }
                let px = pen_x.saturating_add(offset(col));
                let py = y.saturating_add(offset(row));
                let (Ok(px), Ok(py)) = (u32::try_from(px), u32::try_from(py)) else {
                    continue;
                };
                fill_rect(canvas, px, py, scale, scale, style.color);
            }
        }
        pen_x = pen_x.saturating_add(step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const INK: Rgba<u8> = Rgba([0x1f, 0x29, 0x37, 255]);

    fn inked(canvas: &RgbaImage) -> usize {
        canvas.pixels().filter(|p| **p == INK).count()
    }

    #[test]
    fn test_measure() {
        assert_eq!(measure("", 12.0), (0, 7));
        assert_eq!(measure("12", 12.0), (11, 7));
        assert_eq!(measure("12", 24.0), (22, 14));
    }

    #[test]
    fn test_lowercase_matches_uppercase() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('z'), glyph('Z'));
    }

    #[test]
    fn test_unknown_glyph_is_box() {
        assert_eq!(glyph('~'), MISSING);
        assert_eq!(glyph('é'), MISSING);
    }

    #[test]
    fn test_draw_scales() {
        let mut small = RgbaImage::new(40, 20);
        draw(&mut small, "1", 0, 0, TextStyle::new(12.0, INK));

        let mut large = RgbaImage::new(40, 20);
        draw(&mut large, "1", 0, 0, TextStyle::new(24.0, INK));

        // '1' has 10 lit cells.
        assert_eq!(inked(&small), 10);
        assert_eq!(inked(&large), 40);
    }

    #[test]
    fn test_draw_far_right_does_not_overflow() {
        let mut canvas = RgbaImage::new(8, 8);
        draw(&mut canvas, "WWW", i32::MAX - 2, i32::MAX - 2, TextStyle::new(40.0, INK));
        draw(&mut canvas, "WWW", i32::MIN, 0, TextStyle::new(40.0, INK));
        assert_eq!(inked(&canvas), 0);
    }

    #[test]
    fn test_draw_clips_at_edges() {
        let mut canvas = RgbaImage::new(8, 8);
        draw(&mut canvas, "#####", -3, -2, TextStyle::new(10.0, INK));
        draw(&mut canvas, "#####", 5, 5, TextStyle::new(10.0, INK));
        assert!(inked(&canvas) > 0);
    }
}

//! Drawing primitives for the rendered sample images: fonts, text, and
//! filled or outlined boxes.

mod bitmap;
mod font;
mod shapes;

pub use font::{Font, FontFamily, FontSet};
pub use shapes::{blend_box, fill_rect, outline_rect};

use image::{Rgba, RgbaImage};

/// Size and colour of a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Rgba<u8>,
}

impl TextStyle {
    #[must_use]
    pub const fn new(size: f32, color: Rgba<u8>) -> Self {
        Self { size, color }
    }
}

/// Draw `text` with its top-left corner at `(x, y)`. Text starting beyond
/// the canvas is skipped.
pub fn draw_text(canvas: &mut RgbaImage, font: &Font, text: &str, x: u32, y: u32, style: TextStyle) {
    if x >= canvas.width() || y >= canvas.height() {
        return;
    }
    let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) else {
        return;
    };
    font.draw(canvas, text, x, y, style);
}

/// Draw `text` horizontally centered on the canvas with its top at `y`.
pub fn draw_centered(canvas: &mut RgbaImage, font: &Font, text: &str, y: i32, style: TextStyle) {
    let (text_w, _) = font.measure(text, style.size);
    let x = (i64::from(canvas.width()) - i64::from(text_w)) / 2;
    font.draw(
        canvas,
        text,
        i32::try_from(x).unwrap_or(0),
        y,
        style,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_past_canvas_is_skipped() {
        let white = Rgba([255, 255, 255, 255]);
        let mut canvas = RgbaImage::from_pixel(10, 10, white);
        let style = TextStyle::new(10.0, Rgba([0, 0, 0, 255]));

        draw_text(&mut canvas, &Font::Builtin, "ABC", u32::MAX, 0, style);
        draw_text(&mut canvas, &Font::Builtin, "ABC", 0, u32::MAX, style);
        assert!(canvas.pixels().all(|p| *p == white));

        draw_text(&mut canvas, &Font::Builtin, "A", 1, 1, style);
        assert!(canvas.pixels().any(|p| *p != white));
    }

    #[test]
    fn test_centered_text_is_symmetric() {
        let mut canvas = RgbaImage::from_pixel(101, 20, Rgba([255, 255, 255, 255]));
        let style = TextStyle::new(10.0, Rgba([0, 0, 0, 255]));
        draw_centered(&mut canvas, &Font::Builtin, "I", 2, style);

        let inked: Vec<u32> = (0..101)
            .filter(|&x| (0..20).any(|y| canvas.get_pixel(x, y)[0] == 0))
            .collect();
        let (first, last) = (inked[0], inked[inked.len() - 1]);
        assert!(first.abs_diff(100 - last) <= 1, "ink spans {first}..={last}");
    }
}

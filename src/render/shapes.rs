//! Rectangles.

use image::{Pixel, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

/// `None` when the box is empty, starts beyond the canvas, or ends outside
/// the signed coordinate range `imageproc` works in.
fn rect(canvas: &RgbaImage, x: u32, y: u32, width: u32, height: u32) -> Option<Rect> {
    if width == 0 || height == 0 || x >= canvas.width() || y >= canvas.height() {
        return None;
    }

    i32::try_from(x.checked_add(width)?).ok()?;
    i32::try_from(y.checked_add(height)?).ok()?;
    Some(Rect::at(i32::try_from(x).ok()?, i32::try_from(y).ok()?).of_size(width, height))
}

/// Fill a `width`x`height` box at `(x, y)`, replacing the pixels underneath.
/// Parts outside the canvas are clipped.
pub fn fill_rect(canvas: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: Rgba<u8>) {
    let width = width.min(canvas.width().saturating_sub(x));
    let height = height.min(canvas.height().saturating_sub(y));
    if let Some(area) = rect(canvas, x, y, width, height) {
        draw_filled_rect_mut(canvas, area, color);
    }
}

/// Stroke the border of a box `thickness` pixels wide, growing inward.
pub fn outline_rect(
    canvas: &mut RgbaImage,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    color: Rgba<u8>,
    thickness: u32,
) {
    for i in 0..thickness {
        if width <= 2 * i || height <= 2 * i {
            break;
        }
        let ring = rect(
            canvas,
            x.saturating_add(i),
            y.saturating_add(i),
            width - 2 * i,
            height - 2 * i,
        );
        if let Some(ring) = ring {
            draw_hollow_rect_mut(canvas, ring, color);
        }
    }
}

/// Alpha-composite a solid, possibly translucent box over the canvas.
/// Opaque pixels underneath stay fully opaque.
pub fn blend_box(canvas: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: Rgba<u8>) {
    let x_end = x.saturating_add(width).min(canvas.width());
    let y_end = y.saturating_add(height).min(canvas.height());

    for py in y..y_end {
        for px in x..x_end {
            let pixel = canvas.get_pixel_mut(px, py);
            let opaque = pixel[3] == u8::MAX;
            pixel.blend(&color);
            if opaque {
                pixel[3] = u8::MAX;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const GREY: Rgba<u8> = Rgba([0xd1, 0xd5, 0xdb, 255]);

    #[test]
    fn test_fill_rect_bounds() {
        let mut canvas = RgbaImage::from_pixel(10, 10, WHITE);
        fill_rect(&mut canvas, 2, 3, 4, 5, GREY);

        assert_eq!(canvas.get_pixel(2, 3), &GREY);
        assert_eq!(canvas.get_pixel(5, 7), &GREY);
        assert_eq!(canvas.get_pixel(6, 7), &WHITE);
        assert_eq!(canvas.get_pixel(5, 8), &WHITE);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut canvas = RgbaImage::from_pixel(4, 4, WHITE);
        fill_rect(&mut canvas, 2, 2, 10, 10, GREY);
        assert_eq!(canvas.get_pixel(3, 3), &GREY);
    }

    #[test]
    fn test_outline_thickness() {
        let mut canvas = RgbaImage::from_pixel(10, 10, WHITE);
        outline_rect(&mut canvas, 0, 0, 10, 10, GREY, 2);

        assert_eq!(canvas.get_pixel(0, 5), &GREY);
        assert_eq!(canvas.get_pixel(1, 5), &GREY);
        assert_eq!(canvas.get_pixel(2, 5), &WHITE);
        assert_eq!(canvas.get_pixel(9, 9), &GREY);
        assert_eq!(canvas.get_pixel(8, 8), &GREY);
        assert_eq!(canvas.get_pixel(5, 5), &WHITE);
    }

    #[test]
    fn test_blend_box_mixes_colours() {
        let mut canvas = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        blend_box(&mut canvas, 0, 0, 2, 2, Rgba([255, 255, 255, 128]));

        let mixed = canvas.get_pixel(0, 0);
        assert!((120..=136).contains(&mixed[0]), "{mixed:?}");
        assert_eq!(mixed[3], 255);
        assert_eq!(canvas.get_pixel(3, 3), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_blend_box_keeps_opaque_canvas_opaque() {
        let green = Rgba([0x0f, 0x4a, 0x3c, 255]);
        for alpha in [128, 220, 230] {
            let mut canvas = RgbaImage::from_pixel(6, 6, green);
            blend_box(&mut canvas, 1, 1, 4, 4, Rgba([255, 255, 255, alpha]));

            let mixed = canvas.get_pixel(2, 2);
            assert_eq!(mixed[3], 255, "alpha {alpha}: {mixed:?}");
            assert!(mixed[0] > green[0] && mixed[1] > green[1], "{mixed:?}");
            assert_eq!(canvas.get_pixel(0, 0), &green);
            assert_eq!(canvas.get_pixel(5, 5), &green);
        }
    }

    #[test]
    fn test_blend_box_clips_at_edges() {
        let mut canvas = RgbaImage::from_pixel(4, 4, WHITE);
        blend_box(&mut canvas, 2, 2, u32::MAX, u32::MAX, Rgba([0, 0, 0, 128]));
        assert!(canvas.get_pixel(3, 3)[0] < 255);
        assert_eq!(canvas.get_pixel(1, 1), &WHITE);

        blend_box(&mut canvas, u32::MAX, 0, 4, 4, Rgba([0, 0, 0, 128]));
    }

    #[test]
    fn test_far_offsets_do_not_wrap() {
        let mut canvas = RgbaImage::from_pixel(4, 4, WHITE);
        fill_rect(&mut canvas, u32::MAX - 1, 0, 2, 2, GREY);
        outline_rect(&mut canvas, u32::MAX - 3, u32::MAX - 3, 3, 3, GREY, 2);
        assert!(canvas.pixels().all(|p| *p == WHITE));
    }
}

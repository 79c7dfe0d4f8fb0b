//! Placing a scaled image centered on a larger canvas.

use image::{imageops, DynamicImage, GenericImageView, Rgb, RgbImage, Rgba};

use crate::error::{Error, Result};

/// Where a scaled image lands on a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Scale a `width`x`height` image uniformly to the canvas height and center
/// it horizontally.
///
/// When matching the height would overflow the canvas width, the image is
/// scaled to the canvas width instead and centered vertically.
///
/// # Errors
///
/// Returns `Error::UnsupportedDimensions` for zero-sized inputs or when the
/// scaled image would be empty.
#[allow(clippy::cast_possible_truncation)]
pub fn center_fit(width: u32, height: u32, canvas_w: u32, canvas_h: u32) -> Result<Placement> {
    if width == 0 || height == 0 || canvas_w == 0 || canvas_h == 0 {
        return Err(Error::UnsupportedDimensions {
            width,
            height,
            reason: format!("cannot center on a {canvas_w}x{canvas_h} canvas"),
        });
    }

    // Safe: each quotient is bounded by the canvas dimension it is compared to.
    let scaled_w = u64::from(width) * u64::from(canvas_h) / u64::from(height);
    let placement = if scaled_w <= u64::from(canvas_w) {
        let scaled_w = scaled_w as u32;
        Placement {
            x: (canvas_w - scaled_w) / 2,
            y: 0,
            width: scaled_w,
            height: canvas_h,
        }
    } else {
        let scaled_h = (u64::from(height) * u64::from(canvas_w) / u64::from(width)) as u32;
        Placement {
            x: 0,
            y: (canvas_h - scaled_h) / 2,
            width: canvas_w,
            height: scaled_h,
        }
    };

    if placement.width == 0 || placement.height == 0 {
        return Err(Error::UnsupportedDimensions {
            width,
            height,
            reason: format!("scales to nothing on a {canvas_w}x{canvas_h} canvas"),
        });
    }

    tracing::debug!("Centered {width}x{height} on {canvas_w}x{canvas_h} at {placement:?}");
    Ok(placement)
}

/// Paste `img`, scaled by [`center_fit`], onto a solid `background` canvas.
///
/// # Errors
///
/// Returns an error if the placement cannot be computed.
pub fn pad_to_canvas(
    img: &DynamicImage,
    canvas_w: u32,
    canvas_h: u32,
    background: Rgba<u8>,
) -> Result<RgbImage> {
    let (width, height) = img.dimensions();
    let placement = center_fit(width, height, canvas_w, canvas_h)?;

    let scaled = super::resize_exact(img, placement.width, placement.height).to_rgb8();
    let [r, g, b, _] = background.0;
    let mut canvas = RgbImage::from_pixel(canvas_w, canvas_h, Rgb([r, g, b]));
    imageops::replace(
        &mut canvas,
        &scaled,
        i64::from(placement.x),
        i64::from(placement.y),
    );

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_onto_desktop() {
        let placement = center_fit(540, 960, 1280, 800).unwrap();
        assert_eq!(
            placement,
            Placement { x: 415, y: 0, width: 450, height: 800 }
        );
    }

    #[test]
    fn test_centering_properties() {
        let sources = [(540, 960), (1, 1), (100, 3), (3, 100), (1280, 800), (2000, 100)];
        let canvases = [(1280, 800), (800, 1280), (7, 5)];

        for &(w, h) in &sources {
            for &(cw, ch) in &canvases {
                let Ok(p) = center_fit(w, h, cw, ch) else {
                    continue;
                };
                assert!(p.x + p.width <= cw, "{w}x{h} on {cw}x{ch}: {p:?}");
                assert!(p.y + p.height <= ch, "{w}x{h} on {cw}x{ch}: {p:?}");
                assert!(p.x.abs_diff(cw - p.width - p.x) <= 1, "{p:?}");
                assert!(p.y.abs_diff(ch - p.height - p.y) <= 1, "{p:?}");
            }
        }
    }

    #[test]
    fn test_too_wide_fits_by_width() {
        let placement = center_fit(4000, 500, 1280, 800).unwrap();
        assert_eq!(placement.width, 1280);
        assert_eq!(placement.height, 160);
        assert_eq!(placement.y, 320);
    }

    #[test]
    fn test_pad_fills_background_and_pastes() {
        let bg = Rgba([0x1a, 0x4b, 0x3a, 255]);
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(540, 960, Rgb([250, 250, 250])));

        let canvas = pad_to_canvas(&img, 1280, 800, bg).unwrap();
        assert_eq!(canvas.dimensions(), (1280, 800));
        assert_eq!(canvas.get_pixel(0, 0), &Rgb([0x1a, 0x4b, 0x3a]));
        assert_eq!(canvas.get_pixel(1279, 799), &Rgb([0x1a, 0x4b, 0x3a]));
        assert_eq!(canvas.get_pixel(640, 400), &Rgb([250, 250, 250]));
    }
}

//! Crop rectangle computation.

use image::{DynamicImage, GenericImageView};

use crate::error::{Error, Result};

/// A rectangle inside a source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropBox {
    /// Copy this region out of `img`.
    #[must_use]
    pub fn apply(&self, img: &DynamicImage) -> DynamicImage {
        img.crop_imm(self.x, self.y, self.width, self.height)
    }
}

/// Fixed pixel offsets trimmed from each edge of a source image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Insets {
    /// Compute the crop box left after trimming these insets from a
    /// `width`x`height` image.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedDimensions` if the insets consume the whole
    /// image on either axis.
    pub fn crop_box(&self, width: u32, height: u32) -> Result<CropBox> {
        let horizontal = self.left.saturating_add(self.right);
        let vertical = self.top.saturating_add(self.bottom);

        if horizontal >= width || vertical >= height {
            return Err(Error::UnsupportedDimensions {
                width,
                height,
                reason: format!(
                    "insets {horizontal}px horizontal / {vertical}px vertical leave no area"
                ),
            });
        }

        Ok(CropBox {
            x: self.left,
            y: self.top,
            width: width - horizontal,
            height: height - vertical,
        })
    }
}

/// Compute the largest centered box with the aspect ratio `target_w:target_h`
/// that fits inside a `width`x`height` image.
///
/// Wider sources are cropped horizontally only, taller ones vertically only.
/// The cropped extent is truncated to whole pixels.
///
/// # Errors
///
/// Returns `Error::UnsupportedDimensions` if any dimension is zero or the
/// computed box would be empty.
#[allow(clippy::cast_possible_truncation)]
pub fn aspect_fit_crop(width: u32, height: u32, target_w: u32, target_h: u32) -> Result<CropBox> {
    if width == 0 || height == 0 || target_w == 0 || target_h == 0 {
        return Err(Error::UnsupportedDimensions {
            width,
            height,
            reason: format!("cannot fit a {target_w}:{target_h} crop"),
        });
    }

    let (w, h) = (u64::from(width), u64::from(height));
    let (tw, th) = (u64::from(target_w), u64::from(target_h));

    // Safe: both quotients are bounded by the source dimension on that axis.
    let crop = if w * th > h * tw {
        let new_w = (h * tw / th) as u32;
        CropBox {
            x: (width - new_w) / 2,
            y: 0,
            width: new_w,
            height,
        }
    } else {
        let new_h = (w * th / tw) as u32;
        CropBox {
            x: 0,
            y: (height - new_h) / 2,
            width,
            height: new_h,
        }
    };

    if crop.width == 0 || crop.height == 0 {
        return Err(Error::UnsupportedDimensions {
            width,
            height,
            reason: format!("a {target_w}:{target_h} crop truncates to nothing"),
        });
    }

    tracing::debug!("Aspect crop {width}x{height} -> {crop:?} for {target_w}:{target_h}");
    Ok(crop)
}

/// Center-crop `img` to the target aspect ratio and resize it to exactly
/// `target_w`x`target_h`.
///
/// # Errors
///
/// Returns an error if the crop cannot be computed.
pub fn crop_and_resize(img: &DynamicImage, target_w: u32, target_h: u32) -> Result<DynamicImage> {
    let (width, height) = img.dimensions();
    let crop = aspect_fit_crop(width, height, target_w, target_h)?;
    Ok(super::resize_exact(&crop.apply(img), target_w, target_h))
}

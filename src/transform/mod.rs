//! Geometric transforms: cropping, resizing, and canvas padding.

mod crop;
mod pad;

pub use crop::{aspect_fit_crop, crop_and_resize, CropBox, Insets};
pub use pad::{center_fit, pad_to_canvas, Placement};

use image::{imageops::FilterType, DynamicImage};

/// Resampling filter used for every resize.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Resize to exactly `width`x`height`, ignoring the source aspect ratio.
#[must_use]
pub fn resize_exact(img: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    img.resize_exact(width, height, RESAMPLE_FILTER)
}

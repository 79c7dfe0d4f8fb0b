//! PWA store screenshots: a mobile portrait shot and a padded desktop variant.

use std::path::PathBuf;

use image::{DynamicImage, GenericImageView};

use crate::error::{Error, Result};
use crate::image::{load_image, parse_hex, save_png};
use crate::transform::{crop_and_resize, pad_to_canvas, resize_exact, Insets};

use super::{source_present, Outcome};

/// How the mobile screenshot is cut out of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CropMode {
    /// Largest centered region with the mobile aspect ratio.
    #[default]
    AspectFit,

    /// Trim fixed pixel counts from each edge, e.g. to drop status and
    /// navigation bars from a device capture.
    Insets(Insets),
}

/// Configuration for the screenshot generator.
#[derive(Debug, Clone)]
pub struct Config {
    /// Device capture to cut the screenshots from.
    pub source: PathBuf,

    /// Directory receiving `screenshot-mobile.png` and `screenshot-desktop.png`.
    pub out_dir: PathBuf,

    /// Mobile screenshot size (width, height).
    pub mobile_size: (u32, u32),

    /// Desktop canvas size (width, height).
    pub desktop_size: (u32, u32),

    /// Desktop canvas fill as `#RRGGBB`.
    pub desktop_background: String,

    pub crop: CropMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from(
                "attached_assets/Screenshot_20250629_203639_Replit_1751247412738.jpg",
            ),
            out_dir: PathBuf::from("."),
            mobile_size: (540, 960),
            desktop_size: (1280, 800),
            desktop_background: "#1a4b3a".to_string(),
            crop: CropMode::AspectFit,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a target size is zero or the background colour is
    /// not valid hex.
    pub fn validate(&self) -> Result<()> {
        for (name, (w, h)) in [("mobile_size", self.mobile_size), ("desktop_size", self.desktop_size)] {
            if w == 0 || h == 0 {
                return Err(Error::invalid_parameter(name, "dimensions must be greater than 0"));
            }
        }

        parse_hex(&self.desktop_background)?;
        Ok(())
    }

    #[must_use]
    pub fn mobile_path(&self) -> PathBuf {
        self.out_dir.join("screenshot-mobile.png")
    }

    #[must_use]
    pub fn desktop_path(&self) -> PathBuf {
        self.out_dir.join("screenshot-desktop.png")
    }
}

/// Cut the mobile screenshot out of `source` and resize it to `mobile_size`.
///
/// # Errors
///
/// Returns an error if the crop region is empty.
pub fn mobile_screenshot(source: &DynamicImage, config: &Config) -> Result<DynamicImage> {
    let (mobile_w, mobile_h) = config.mobile_size;

    match config.crop {
        CropMode::AspectFit => crop_and_resize(source, mobile_w, mobile_h),
        CropMode::Insets(insets) => {
            let (width, height) = source.dimensions();
            let crop = insets.crop_box(width, height)?;
            tracing::debug!("Inset crop {width}x{height} -> {crop:?}");
            Ok(resize_exact(&crop.apply(source), mobile_w, mobile_h))
        }
    }
}

/// Write the mobile screenshot and the desktop variant built from it.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the source cannot be
/// decoded, the crop is empty, or an output cannot be written. A missing
/// source is not an error.
pub fn generate(config: &Config) -> Result<Outcome> {
    config.validate()?;

    if !source_present(&config.source) {
        return Ok(Outcome::SourceMissing(config.source.clone()));
    }

    let source = load_image(&config.source)?;

    let mobile = mobile_screenshot(&source, config)?;
    let mobile_path = config.mobile_path();
    save_png(&mobile, &mobile_path)?;

    let (desktop_w, desktop_h) = config.desktop_size;
    let background = parse_hex(&config.desktop_background)?;
    let desktop = pad_to_canvas(&mobile, desktop_w, desktop_h, background)?;
    let desktop_path = config.desktop_path();
    save_png(&DynamicImage::ImageRgb8(desktop), &desktop_path)?;

    tracing::info!("PWA screenshots created successfully");
    Ok(Outcome::Generated(vec![mobile_path, desktop_path]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_fit_mobile() {
        let source = DynamicImage::new_rgb8(1920, 1080);
        let mobile = mobile_screenshot(&source, &Config::default()).unwrap();
        assert_eq!(mobile.dimensions(), (540, 960));
    }

    #[test]
    fn test_inset_mobile() {
        let config = Config {
            crop: CropMode::Insets(Insets {
                left: 0,
                top: 80,
                right: 0,
                bottom: 120,
            }),
            ..Config::default()
        };
        let source = DynamicImage::new_rgb8(1080, 2400);
        let mobile = mobile_screenshot(&source, &config).unwrap();
        assert_eq!(mobile.dimensions(), (540, 960));
    }

    #[test]
    fn test_inset_larger_than_source() {
        let config = Config {
            crop: CropMode::Insets(Insets {
                left: 0,
                top: 500,
                right: 0,
                bottom: 500,
            }),
            ..Config::default()
        };
        let source = DynamicImage::new_rgb8(400, 900);
        assert!(matches!(
            mobile_screenshot(&source, &config),
            Err(Error::UnsupportedDimensions { .. })
        ));
    }

    #[test]
    fn test_validate() {
        assert!(Config::default().validate().is_ok());

        let bad_colour = Config {
            desktop_background: "green".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            bad_colour.validate(),
            Err(Error::InvalidColor { .. })
        ));

        let zero = Config {
            mobile_size: (0, 960),
            ..Config::default()
        };
        assert!(zero.validate().is_err());
    }
}

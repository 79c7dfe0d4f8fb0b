//! PWA home-screen icons.

use std::path::PathBuf;

use image::DynamicImage;

use crate::error::{Error, Result};
use crate::image::{load_image, save_png};
use crate::transform::resize_exact;

use super::{source_present, Outcome};

/// Configuration for the icon generator.
#[derive(Debug, Clone)]
pub struct Config {
    /// Source artwork, any size. Non-square sources are stretched.
    pub source: PathBuf,

    /// Directory receiving `icon-<size>.png`.
    pub out_dir: PathBuf,

    /// Square edge lengths to produce.
    pub sizes: Vec<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from(
                "attached_assets/360_F_164815013_dTTCrIEDJtEUsssQKo6p6SqdFnI8zPoT_1751146723688.jpg",
            ),
            out_dir: PathBuf::from("."),
            sizes: vec![192, 512],
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if no sizes are requested or any size is zero.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(Error::invalid_parameter("sizes", "at least one size is required"));
        }

        if self.sizes.contains(&0) {
            return Err(Error::invalid_parameter("sizes", "must be greater than 0"));
        }

        Ok(())
    }

    /// Output path for one icon size.
    #[must_use]
    pub fn icon_path(&self, size: u32) -> PathBuf {
        self.out_dir.join(format!("icon-{size}.png"))
    }
}

/// Resize the source into every configured icon size, keeping an alpha channel.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the source cannot be
/// decoded or an icon cannot be written. A missing source is not an error.
pub fn generate(config: &Config) -> Result<Outcome> {
    config.validate()?;

    if !source_present(&config.source) {
        return Ok(Outcome::SourceMissing(config.source.clone()));
    }

    let source = DynamicImage::ImageRgba8(load_image(&config.source)?.to_rgba8());

    let mut written = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let icon = resize_exact(&source, size, size);
        let path = config.icon_path(size);
        save_png(&icon, &path)?;
        written.push(path);
    }

    tracing::info!("PWA icons updated successfully");
    Ok(Outcome::Generated(written))
}

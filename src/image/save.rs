//! Image saving utilities.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::DynamicImage;

use crate::error::{Error, Result};

/// Save an image as an optimized PNG.
///
/// Uses the best compression level with adaptive row filtering, which is the
/// closest equivalent of an "optimize" save. The parent directory is created
/// when missing.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created, or encoding fails.
pub fn save_png<P: AsRef<Path>>(img: &DynamicImage, path: P) -> Result<()> {
    let path = path.as_ref();

    ensure_parent_dir(path)?;

    let save_error = |source: image::ImageError| Error::ImageSave {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|err| save_error(image::ImageError::IoError(err)))?;
    let mut writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(
        &mut writer,
        CompressionType::Best,
        FilterType::Adaptive,
    );

    img.write_with_encoder(encoder).map_err(save_error)?;
    writer
        .flush()
        .map_err(|err| save_error(image::ImageError::IoError(err)))?;

    tracing::info!(
        "Created {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );

    Ok(())
}

/// Create the parent directory of `path` if it does not exist yet.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|source| Error::OutputDir {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

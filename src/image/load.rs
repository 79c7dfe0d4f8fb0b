//! Image loading utilities.

use std::path::Path;

use image::{DynamicImage, GenericImageView};

use crate::error::{Error, Result};

/// Load an image from disk.
///
/// The format is guessed from the file contents, so JPEG screenshots with a
/// `.png` extension (and the reverse) still decode.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();

    let img = image::ImageReader::open(path)
        .map_err(|source| Error::ImageLoad {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(source),
        })?
        .with_guessed_format()
        .map_err(|source| Error::ImageLoad {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(source),
        })?
        .decode()
        .map_err(|source| Error::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;

    let (width, height) = img.dimensions();
    tracing::debug!("Loaded {} ({width}x{height}, {:?})", path.display(), img.color());

    Ok(img)
}

//! Font resolution with a fallback chain ending in the built-in bitmap font.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use ab_glyph::{FontVec, PxScale};
use image::RgbaImage;
use imageproc::drawing::{draw_text_mut, text_size};

use super::{bitmap, TextStyle};

/// A loaded font: either a TrueType/OpenType face or the built-in bitmap font.
pub enum Font {
    Vector(FontVec),
    Builtin,
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vector(_) => f.write_str("Font::Vector"),
            Self::Builtin => f.write_str("Font::Builtin"),
        }
    }
}

impl Font {
    /// Width and height in pixels of `text` at `size`.
    #[must_use]
    pub fn measure(&self, text: &str, size: f32) -> (u32, u32) {
        match self {
            Self::Vector(face) => text_size(PxScale::from(size), face, text),
            Self::Builtin => bitmap::measure(text, size),
        }
    }

    /// Draw `text` with its top-left corner at `(x, y)`.
    pub fn draw(&self, canvas: &mut RgbaImage, text: &str, x: i32, y: i32, style: TextStyle) {
        match self {
            Self::Vector(face) => draw_text_mut(
                canvas,
                style.color,
                x,
                y,
                PxScale::from(style.size),
                face,
                text,
            ),
            Self::Builtin => bitmap::draw(canvas, text, x, y, style),
        }
    }

    /// Load the first candidate that exists and parses as a font, or the
    /// built-in font if none does.
    pub fn resolve<P: AsRef<Path>>(candidates: &[P]) -> Self {
        for candidate in candidates {
            let path = candidate.as_ref();
            match load_face(path) {
                Ok(face) => {
                    tracing::debug!("Using font {}", path.display());
                    return Self::Vector(face);
                }
                Err(FaceError::Missing) => {
                    tracing::trace!("Font candidate {} not found", path.display());
                }
                Err(FaceError::Unusable(reason)) => {
                    tracing::warn!("Skipping font {}: {reason}", path.display());
                }
            }
        }

        tracing::debug!("No font candidate loaded, using built-in font");
        Self::Builtin
    }
}

enum FaceError {
    Missing,
    Unusable(String),
}

fn load_face(path: &Path) -> Result<FontVec, FaceError> {
    let bytes = fs::read(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => FaceError::Missing,
        _ => FaceError::Unusable(err.to_string()),
    })?;
    FontVec::try_from_vec(bytes).map_err(|err| FaceError::Unusable(err.to_string()))
}

/// Which family of font a piece of text wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    /// Proportional sans-serif for headings and labels.
    Regular,
    /// Fixed-width face for hex codes.
    Monospace,
}

impl FontFamily {
    /// Well-known locations of a suitable face on macOS, Windows and Linux,
    /// in lookup order.
    #[must_use]
    pub fn system_candidates(self) -> Vec<PathBuf> {
        let (files, names): (&[&str], &[&str]) = match self {
            Self::Regular => (
                &[
                    "/System/Library/Fonts/Arial.ttf",
                    "/System/Library/Fonts/Supplemental/Arial.ttf",
                    "arial.ttf",
                    "C:\\Windows\\Fonts\\arial.ttf",
                    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
                    "/usr/share/fonts/TTF/DejaVuSans.ttf",
                    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
                    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
                ],
                &["arial.ttf", "DejaVuSans.ttf"],
            ),
            Self::Monospace => (
                &[
                    "/System/Library/Fonts/Courier.ttf",
                    "/System/Library/Fonts/Supplemental/Courier New.ttf",
                    "courier.ttf",
                    "C:\\Windows\\Fonts\\cour.ttf",
                    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
                    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
                    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
                    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
                ],
                &["cour.ttf", "DejaVuSansMono.ttf"],
            ),
        };

        let mut candidates: Vec<PathBuf> = files.iter().map(PathBuf::from).collect();
        if let Some(user_fonts) = dirs::font_dir() {
            candidates.extend(names.iter().map(|name| user_fonts.join(name)));
        }
        candidates
    }
}

/// The regular and monospace fonts used by one rendering.
#[derive(Debug)]
pub struct FontSet {
    pub regular: Font,
    pub mono: Font,
}

impl FontSet {
    /// Resolve both families, trying `regular` and `mono` overrides before the
    /// system locations.
    #[must_use]
    pub fn load(regular: &[PathBuf], mono: &[PathBuf]) -> Self {
        let chain = |overrides: &[PathBuf], family: FontFamily| {
            let mut candidates = overrides.to_vec();
            candidates.extend(family.system_candidates());
            Font::resolve(&candidates)
        };

        Self {
            regular: chain(regular, FontFamily::Regular),
            mono: chain(mono, FontFamily::Monospace),
        }
    }

    /// Both families set to the built-in font. Output does not depend on the
    /// fonts installed on the host.
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            regular: Font::Builtin,
            mono: Font::Builtin,
        }
    }
}

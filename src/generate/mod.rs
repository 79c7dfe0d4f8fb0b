//! The asset generators. Each one is independent: it reads at most one
//! source image and writes its own PNG files.

pub mod icons;
pub mod screenshots;
pub mod swatch;
pub mod texture_sample;

use std::path::PathBuf;

/// What a generator run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Files written, in order.
    Generated(Vec<PathBuf>),

    /// The source image does not exist; nothing was written.
    SourceMissing(PathBuf),
}

impl Outcome {
    /// Paths written by the run, empty if the source was missing.
    #[must_use]
    pub fn written(&self) -> &[PathBuf] {
        match self {
            Self::Generated(paths) => paths,
            Self::SourceMissing(_) => &[],
        }
    }
}

/// Check that a source image exists before any work is done.
fn source_present(path: &std::path::Path) -> bool {
    if path.exists() {
        true
    } else {
        tracing::warn!("Source image not found: {}", path.display());
        false
    }
}

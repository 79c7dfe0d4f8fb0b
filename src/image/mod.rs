//! Image loading, colour parsing, and saving utilities.

mod color;
mod load;
mod save;

pub use color::{parse_hex, Palette};
pub use load::load_image;
pub use save::{ensure_parent_dir, save_png};

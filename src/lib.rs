//! # assetgen
//!
//! Generates the static image assets of the billiards scorekeeper PWA: home
//! screen icons, store screenshots, a cloth texture sample, and a cloth
//! colour swatch.
//!
//! Each generator is a plain function over a `Config`. A missing source image
//! is reported as [`Outcome::SourceMissing`] rather than an error.
//!
//! ## Example
//!
//! ```no_run
//! use assetgen::generate::{icons, Outcome};
//!
//! # fn main() -> assetgen::Result<()> {
//! match icons::generate(&icons::Config::default())? {
//!     Outcome::Generated(paths) => println!("wrote {} icons", paths.len()),
//!     Outcome::SourceMissing(path) => println!("no source at {}", path.display()),
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generate;
pub mod image;
pub mod render;
pub mod texture;
pub mod transform;

pub use error::{Error, Result};
pub use generate::Outcome;

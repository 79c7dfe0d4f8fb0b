//! Procedural cloth texture layers.
//!
//! A cloth swatch is built from a solid base colour with three translucent
//! layers composited on top, in order: a checkerboard weave, per-pixel fiber
//! noise, and directional grain lines.

mod grain;
mod noise;
mod weave;

pub use grain::grain_lines;
pub use noise::noise_field;
pub use weave::weave_grid;

use image::{imageops, Rgba, RgbaImage};
use rand::Rng;

use crate::error::{Error, Result};

/// Parameters of the layered cloth texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClothTexture {
    /// Edge length in pixels of one weave block.
    pub weave_scale: u32,

    /// Fiber noise spread as a fraction of the full alpha range (0.0-1.0).
    pub noise_intensity: f32,
}

impl Default for ClothTexture {
    fn default() -> Self {
        Self {
            weave_scale: 3,
            noise_intensity: 0.015,
        }
    }
}

impl ClothTexture {
    /// Validate the texture parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if self.weave_scale == 0 {
            return Err(Error::invalid_parameter(
                "weave_scale",
                "must be greater than 0",
            ));
        }

        if !(0.0..=1.0).contains(&self.noise_intensity) {
            return Err(Error::invalid_parameter(
                "noise_intensity",
                "must be between 0.0 and 1.0",
            ));
        }

        Ok(())
    }

    /// Render a `width`x`height` patch of textured cloth in `base` colour.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid.
    pub fn render<R: Rng + ?Sized>(
        &self,
        base: Rgba<u8>,
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> Result<RgbaImage> {
        self.validate()?;

        let mut cloth = RgbaImage::from_pixel(width, height, base);

        let weave = weave_grid(width, height, self.weave_scale);
        imageops::overlay(&mut cloth, &weave, 0, 0);

        let noise = noise_field(width, height, self.noise_intensity, rng);
        imageops::overlay(&mut cloth, &noise, 0, 0);

        let grain = grain_lines(width, height, rng);
        imageops::overlay(&mut cloth, &grain, 0, 0);

        Ok(cloth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Pixel;
    use rand::{rngs::StdRng, SeedableRng};

    const GREEN: Rgba<u8> = Rgba([0x0f, 0x4a, 0x3c, 255]);

    #[test]
    fn test_render_is_opaque_and_close_to_base() {
        let mut rng = StdRng::seed_from_u64(7);
        let cloth = ClothTexture::default()
            .render(GREEN, 40, 30, &mut rng)
            .unwrap();

        assert_eq!(cloth.dimensions(), (40, 30));
        for pixel in cloth.pixels() {
            assert_eq!(pixel[3], 255);
            // Low opacity layers only nudge the base colour.
            for c in 0..3 {
                assert!(
                    pixel[c].abs_diff(GREEN[c]) <= 64,
                    "{pixel:?} drifted too far from {GREEN:?}"
                );
            }
        }
    }

    #[test]
    fn test_layers_composite_weave_then_noise_then_grain() {
        let texture = ClothTexture::default();
        let (width, height) = (30, 20);
        let cloth = texture
            .render(GREEN, width, height, &mut StdRng::seed_from_u64(17))
            .unwrap();

        let mut rng = StdRng::seed_from_u64(17);
        let mut expected = RgbaImage::from_pixel(width, height, GREEN);
        imageops::overlay(&mut expected, &weave_grid(width, height, texture.weave_scale), 0, 0);
        imageops::overlay(
            &mut expected,
            &noise_field(width, height, texture.noise_intensity, &mut rng),
            0,
            0,
        );
        imageops::overlay(&mut expected, &grain_lines(width, height, &mut rng), 0, 0);

        assert_eq!(cloth, expected);
    }

    #[test]
    fn test_noise_lands_on_top_of_weave() {
        // Flat noise makes the pixel value depend only on layer order.
        let texture = ClothTexture {
            noise_intensity: 0.0,
            ..ClothTexture::default()
        };
        let cloth = texture
            .render(GREEN, 5, 5, &mut StdRng::seed_from_u64(0))
            .unwrap();

        let weave = Rgba([0, 0, 0, 15]);
        let noise = Rgba([255, 255, 255, 30]);

        let mut weave_first = GREEN;
        weave_first.blend(&weave);
        weave_first.blend(&noise);

        let mut noise_first = GREEN;
        noise_first.blend(&noise);
        noise_first.blend(&weave);

        // (1, 1) sits in weave block (0, 0) and off every grain line.
        let pixel = cloth.get_pixel(1, 1);
        assert_eq!(pixel.0[..3], weave_first.0[..3]);
        assert_ne!(pixel.0[..3], noise_first.0[..3]);
    }

    #[test]
    fn test_same_seed_same_texture() {
        let texture = ClothTexture::default();
        let a = texture
            .render(GREEN, 64, 64, &mut StdRng::seed_from_u64(42))
            .unwrap();
        let b = texture
            .render(GREEN, 64, 64, &mut StdRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_layers_change_the_base() {
        let mut rng = StdRng::seed_from_u64(1);
        let cloth = ClothTexture::default()
            .render(GREEN, 16, 16, &mut rng)
            .unwrap();
        assert!(cloth.pixels().any(|p| *p != GREEN));
    }

    #[test]
    fn test_validate() {
        let mut texture = ClothTexture::default();
        assert!(texture.validate().is_ok());

        texture.weave_scale = 0;
        assert!(texture.validate().is_err());

        texture = ClothTexture {
            noise_intensity: 1.5,
            ..ClothTexture::default()
        };
        assert!(texture.validate().is_err());
    }
}

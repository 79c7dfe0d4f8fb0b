//! Fiber noise layer.

use image::{Rgba, RgbaImage};
use rand::Rng;

/// Alpha level the noise jitters around.
const BASELINE_ALPHA: i32 = 30;

/// Fill a white layer whose per-pixel alpha is the baseline plus a uniform
/// offset in `[-k, k]`, where `k = trunc(255 * intensity)`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn noise_field<R: Rng + ?Sized>(
    width: u32,
    height: u32,
    intensity: f32,
    rng: &mut R,
) -> RgbaImage {
    let spread = (255.0 * intensity.clamp(0.0, 1.0)) as i32;

    RgbaImage::from_fn(width, height, |_, _| {
        let offset = rng.random_range(-spread..=spread);
        // Safe: clamped to [0, 255] before casting
        let alpha = (BASELINE_ALPHA + offset).clamp(0, 255) as u8;
        Rgba([255, 255, 255, alpha])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_alpha_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(3);
        // trunc(255 * 0.015) = 3
        let noise = noise_field(50, 50, 0.015, &mut rng);

        for pixel in noise.pixels() {
            assert_eq!(&pixel.0[..3], &[255, 255, 255]);
            assert!((27..=33).contains(&pixel[3]), "alpha {} out of band", pixel[3]);
        }
    }

    #[test]
    fn test_zero_intensity_is_flat() {
        let mut rng = StdRng::seed_from_u64(3);
        let noise = noise_field(8, 8, 0.0, &mut rng);
        assert!(noise.pixels().all(|p| p[3] == 30));
    }

    #[test]
    fn test_full_intensity_clamps() {
        let mut rng = StdRng::seed_from_u64(9);
        let noise = noise_field(64, 64, 1.0, &mut rng);
        // Offsets reach well below -30, so some pixels clamp to fully clear.
        assert!(noise.pixels().any(|p| p[3] == 0));
    }

    #[test]
    fn test_noise_varies() {
        let mut rng = StdRng::seed_from_u64(11);
        let noise = noise_field(32, 32, 0.05, &mut rng);
        let first = noise.get_pixel(0, 0)[3];
        assert!(noise.pixels().any(|p| p[3] != first));
    }
}

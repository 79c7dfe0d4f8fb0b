//! Side-by-side comparison of textured cloth in two player colours, with a
//! score overlay to show legibility in context.

use std::path::PathBuf;

use image::{imageops, DynamicImage, RgbaImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::image::{parse_hex, save_png, Palette};
use crate::render::{blend_box, draw_centered, draw_text, outline_rect, FontSet, TextStyle};
use crate::texture::ClothTexture;

use super::Outcome;

pub const WIDTH: u32 = 600;
pub const HEIGHT: u32 = 400;

const MARGIN: u32 = 20;
const AREA_HEIGHT: u32 = 200;
const AREA_TOP: u32 = 60;
const SCORE_BOX: (u32, u32) = (80, 50);
const SCORE_ALPHA: u8 = 220;

const TITLE: &str = "Billiards Cloth Texture Sample";

const FEATURES: [&str; 5] = [
    "Cloth Texture Features:",
    "\u{2022} Subtle weave pattern simulating billiards felt",
    "\u{2022} Random fiber noise for authentic texture",
    "\u{2022} Directional grain lines for fabric appearance",
    "\u{2022} Low opacity overlays preserve color visibility",
];

/// One textured panel of the sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClothSample {
    pub name: &'static str,
    pub hex: &'static str,
    pub player: &'static str,
}

pub const SAMPLES: [ClothSample; 2] = [
    ClothSample {
        name: "Championship Green",
        hex: "#0F4A3C",
        player: "Player 1",
    },
    ClothSample {
        name: "Electric Blue",
        hex: "#3B82F6",
        player: "Player 2",
    },
];

/// Configuration for the texture sample.
#[derive(Debug, Clone)]
pub struct Config {
    pub out: PathBuf,

    /// Seed for the noise and grain layers. `None` draws from OS entropy, so
    /// every run differs.
    pub seed: Option<u64>,

    pub texture: ClothTexture,

    /// Font files to try before the system locations.
    pub fonts: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out: PathBuf::from("cloth_texture_sample.png"),
            seed: None,
            texture: ClothTexture::default(),
            fonts: Vec::new(),
        }
    }
}

/// Panel width: two panels and three margins span the canvas.
#[must_use]
pub const fn area_width() -> u32 {
    (WIDTH - 3 * MARGIN) / 2
}

/// Render the sample image.
///
/// # Errors
///
/// Returns an error if the texture parameters are invalid.
pub fn render<R: Rng + ?Sized>(
    texture: &ClothTexture,
    fonts: &FontSet,
    rng: &mut R,
) -> Result<RgbaImage> {
    texture.validate()?;

    let palette = Palette::default();
    let mut img = RgbaImage::from_pixel(WIDTH, HEIGHT, palette.background);

    draw_centered(
        &mut img,
        &fonts.regular,
        TITLE,
        15,
        TextStyle::new(20.0, palette.heading),
    );

    let area_w = area_width();
    let (score_w, score_h) = SCORE_BOX;

    for (i, sample) in (0u32..).zip(SAMPLES.iter()) {
        let x = MARGIN + i * (area_w + MARGIN);
        let y = AREA_TOP;

        let cloth = texture.render(parse_hex(sample.hex)?, area_w, AREA_HEIGHT, rng)?;
        imageops::replace(&mut img, &cloth, i64::from(x), i64::from(y));
        outline_rect(&mut img, x, y, area_w + 1, AREA_HEIGHT + 1, palette.border, 2);

        let score_x = x + (area_w - score_w) / 2;
        let score_y = y + (AREA_HEIGHT - score_h) / 2;
        let mut overlay = palette.white;
        overlay[3] = SCORE_ALPHA;
        blend_box(&mut img, score_x, score_y, score_w, score_h, overlay);
        draw_text(
            &mut img,
            &fonts.regular,
            "15",
            score_x + 35,
            score_y + 10,
            TextStyle::new(20.0, palette.heading),
        );
        draw_text(
            &mut img,
            &fonts.regular,
            "Score",
            score_x + 28,
            score_y + 32,
            TextStyle::new(11.0, palette.body),
        );

        let label_y = y + AREA_HEIGHT + 10;
        draw_text(
            &mut img,
            &fonts.regular,
            sample.name,
            x,
            label_y,
            TextStyle::new(14.0, palette.heading),
        );
        draw_text(
            &mut img,
            &fonts.regular,
            &format!("{} Background", sample.player),
            x,
            label_y + 18,
            TextStyle::new(11.0, palette.body),
        );
        draw_text(
            &mut img,
            &fonts.regular,
            sample.hex,
            x,
            label_y + 32,
            TextStyle::new(11.0, palette.muted),
        );
    }

    let desc_y = AREA_TOP + AREA_HEIGHT + 80;
    for (i, line) in (0u32..).zip(FEATURES) {
        let style = if i == 0 {
            TextStyle::new(14.0, palette.heading)
        } else {
            TextStyle::new(11.0, palette.body)
        };
        draw_text(&mut img, &fonts.regular, line, MARGIN, desc_y + i * 16, style);
    }

    Ok(img)
}

/// Render the sample and write it as an RGB PNG.
///
/// # Errors
///
/// Returns an error if rendering fails or the file cannot be written.
pub fn generate(config: &Config) -> Result<Outcome> {
    config.texture.validate()?;

    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let fonts = FontSet::load(&config.fonts, &[]);

    let img = render(&config.texture, &fonts, &mut rng)?;
    let rgb = DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(img).to_rgb8());
    save_png(&rgb, &config.out)?;

    Ok(Outcome::Generated(vec![config.out.clone()]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_seeded(seed: u64) -> RgbaImage {
        render(
            &ClothTexture::default(),
            &FontSet::builtin(),
            &mut StdRng::seed_from_u64(seed),
        )
        .unwrap()
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(render_seeded(1).dimensions(), (WIDTH, HEIGHT));
        assert_eq!(area_width(), 270);
    }

    #[test]
    fn test_seeded_render_is_reproducible() {
        assert_eq!(render_seeded(99), render_seeded(99));
        assert_ne!(render_seeded(99), render_seeded(100));
    }

    #[test]
    fn test_panel_border_and_score_box() {
        let img = render_seeded(5);
        let palette = Palette::default();

        // Top-left corner of the first panel is border.
        assert_eq!(img.get_pixel(MARGIN, AREA_TOP), &palette.border);

        // Score box centre is nearly white over the green cloth.
        let cx = MARGIN + area_width() / 2;
        let cy = AREA_TOP + AREA_HEIGHT / 2 + 20;
        let pixel = img.get_pixel(cx - 30, cy);
        assert!(pixel[0] > 200 && pixel[1] > 200 && pixel[2] > 200, "{pixel:?}");
    }

    #[test]
    fn test_invalid_texture_rejected() {
        let texture = ClothTexture {
            weave_scale: 0,
            ..ClothTexture::default()
        };
        let result = render(&texture, &FontSet::builtin(), &mut StdRng::seed_from_u64(0));
        assert!(result.is_err());
    }
}

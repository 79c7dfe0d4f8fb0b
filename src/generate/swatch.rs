//! Grid of cloth colour cards with a short explanation of how players pick
//! their background colour.

use std::path::PathBuf;

use image::{DynamicImage, RgbaImage};

use crate::error::{Error, Result};
use crate::image::{parse_hex, save_png, Palette};
use crate::render::{
    blend_box, draw_centered, draw_text, fill_rect, outline_rect, FontSet, TextStyle,
};

use super::Outcome;

const TITLE: &str = "Billiards Cloth Color Options";

const EXPLANATION: [&str; 4] = [
    "How it works:",
    "\u{2022} Each player selects their preferred background color during setup",
    "\u{2022} The scoring area background changes to the active player's color",
    "\u{2022} Colors reset to defaults for each new match",
];

/// One card of the swatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClothColor {
    pub name: String,
    /// `#RRGGBB`
    pub hex: String,
    pub description: String,
    /// Badge shown in the card corner, e.g. "Player 1 Default".
    pub default_label: Option<String>,
}

impl ClothColor {
    #[must_use]
    pub fn new(name: &str, hex: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            hex: hex.to_string(),
            description: description.to_string(),
            default_label: None,
        }
    }

    #[must_use]
    pub fn with_default_label(mut self, label: &str) -> Self {
        self.default_label = Some(label.to_string());
        self
    }
}

/// The six cloth colours offered in the app.
#[must_use]
pub fn default_colors() -> Vec<ClothColor> {
    vec![
        ClothColor::new("Championship Green", "#0F4A3C", "Classic tournament green")
            .with_default_label("Player 1 Default"),
        ClothColor::new("Tournament Blue", "#1E3A8A", "Professional tournament blue")
            .with_default_label("Player 2 Default"),
        ClothColor::new("Deep Burgundy", "#5B1A1A", "Rich deep burgundy cloth"),
        ClothColor::new("Championship Black", "#1F1F1F", "Premium black cloth"),
        ClothColor::new("Electric Blue", "#1D4ED8", "Modern electric blue"),
        ClothColor::new("Charcoal Gray", "#374151", "Professional charcoal gray"),
    ]
}

/// Card grid geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub card_width: u32,
    pub card_height: u32,
    pub margin: u32,
    pub columns: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            card_width: 200,
            card_height: 160,
            margin: 20,
            columns: 3,
        }
    }
}

/// Height of the colour block at the top of each card.
const COLOR_BLOCK: u32 = 80;
/// Space above the first row reserved for the title.
const HEADER: u32 = 70;
/// Extra canvas height beyond the card grid.
const EXTRA_HEIGHT: u32 = 100;
/// Explanation box starts this far above the bottom edge.
const EXPLANATION_HEIGHT: u32 = 80;

impl Layout {
    /// Validate the layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid has no columns, cards cannot hold their
    /// colour block, or a single row of cards does not fit in `u32` pixels.
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            return Err(Error::invalid_parameter("columns", "must be greater than 0"));
        }

        if self.card_width == 0 || self.card_height <= COLOR_BLOCK {
            return Err(Error::invalid_parameter(
                "card size",
                "cards must be wider than 0 and taller than the colour block",
            ));
        }

        if self.margin >= EXPLANATION_HEIGHT {
            return Err(Error::invalid_parameter(
                "margin",
                "must be smaller than the explanation box",
            ));
        }

        self.canvas_size(self.columns)?;
        Ok(())
    }

    /// Number of rows needed for `count` cards.
    #[must_use]
    pub const fn rows(&self, count: u32) -> u32 {
        if self.columns == 0 {
            0
        } else {
            count.div_ceil(self.columns)
        }
    }

    /// Canvas size for `count` cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid has no columns or either side overflows `u32`.
    pub fn canvas_size(&self, count: u32) -> Result<(u32, u32)> {
        if self.columns == 0 {
            return Err(Error::invalid_parameter("columns", "must be greater than 0"));
        }

        let overflow = || Error::invalid_parameter("layout", "canvas size overflows u32");
        let span = |cells: u32, cell: u32| {
            cells
                .checked_mul(cell)?
                .checked_add(cells.checked_add(1)?.checked_mul(self.margin)?)
        };

        let rows = self.rows(count);
        let width = span(self.columns, self.card_width).ok_or_else(overflow)?;
        let height = span(rows, self.card_height)
            .and_then(|grid| grid.checked_add(EXTRA_HEIGHT))
            .ok_or_else(overflow)?;
        Ok((width, height))
    }

    /// Top-left corner of card `index`, filled row by row.
    #[must_use]
    pub const fn card_origin(&self, index: u32) -> (u32, u32) {
        let row = index / self.columns;
        let col = index % self.columns;
        (
            self.margin + col * (self.card_width + self.margin),
            HEADER + self.margin + row * (self.card_height + self.margin),
        )
    }
}

/// Configuration for the swatch generator.
#[derive(Debug, Clone)]
pub struct Config {
    pub out: PathBuf,
    pub colors: Vec<ClothColor>,
    pub layout: Layout,

    /// Font files to try before the system locations.
    pub fonts: Vec<PathBuf>,

    /// Monospace font files for the hex codes, tried before the system locations.
    pub mono_fonts: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out: PathBuf::from("billiards_color_swatch.png"),
            colors: default_colors(),
            layout: Layout::default(),
            fonts: Vec::new(),
            mono_fonts: Vec::new(),
        }
    }
}

const PLAYER_ONE_BADGE: &str = "#22c55e";
const OTHER_BADGE: &str = "#3b82f6";

/// Render the swatch for `colors`.
///
/// # Errors
///
/// Returns an error if the layout is invalid, there are more cards than fit
/// in `u32`, or a colour is not valid hex.
pub fn render(colors: &[ClothColor], layout: &Layout, fonts: &FontSet) -> Result<RgbaImage> {
    layout.validate()?;

    let count = u32::try_from(colors.len())
        .map_err(|_| Error::invalid_parameter("colors", "too many cards"))?;
    let (width, height) = layout.canvas_size(count)?;
    tracing::debug!("Swatch canvas {width}x{height} for {count} cards");

    let palette = Palette::default();
    let mut img = RgbaImage::from_pixel(width, height, palette.background);

    draw_centered(
        &mut img,
        &fonts.regular,
        TITLE,
        20,
        TextStyle::new(24.0, palette.heading),
    );

    for (index, color) in (0u32..).zip(colors) {
        draw_card(&mut img, layout, layout.card_origin(index), color, fonts, &palette)?;
    }

    let exp_y = height - EXPLANATION_HEIGHT;
    let margin = layout.margin;
    let box_w = width - 2 * margin + 1;
    let box_h = EXPLANATION_HEIGHT - margin + 1;
    fill_rect(&mut img, margin, exp_y, box_w, box_h, palette.panel);
    outline_rect(&mut img, margin, exp_y, box_w, box_h, palette.border, 1);

    for (i, line) in (0u32..).zip(EXPLANATION) {
        let style = if i == 0 {
            TextStyle::new(14.0, palette.heading)
        } else {
            TextStyle::new(10.0, palette.body)
        };
        draw_text(&mut img, &fonts.regular, line, margin + 10, exp_y + 8 + i * 15, style);
    }

    Ok(img)
}

fn draw_card(
    img: &mut RgbaImage,
    layout: &Layout,
    (x, y): (u32, u32),
    color: &ClothColor,
    fonts: &FontSet,
    palette: &Palette,
) -> Result<()> {
    let card_w = layout.card_width;

    fill_rect(img, x, y, card_w + 1, COLOR_BLOCK + 1, parse_hex(&color.hex)?);
    outline_rect(img, x, y, card_w + 1, COLOR_BLOCK + 1, palette.border, 2);

    // Score display mockup.
    let (score_w, score_h) = (60, 40);
    let score_x = x + card_w.saturating_sub(score_w) / 2;
    let score_y = y + (COLOR_BLOCK - score_h) / 2;
    let mut overlay = palette.white;
    overlay[3] = 230;
    blend_box(img, score_x, score_y, score_w, score_h, overlay);
    draw_text(
        img,
        &fonts.regular,
        "12",
        score_x + 25,
        score_y + 8,
        TextStyle::new(14.0, palette.heading),
    );
    draw_text(
        img,
        &fonts.regular,
        "Score",
        score_x + 18,
        score_y + 25,
        TextStyle::new(10.0, palette.body),
    );

    if let Some(label) = &color.default_label {
        let badge = if label.contains("Player 1") {
            PLAYER_ONE_BADGE
        } else {
            OTHER_BADGE
        };
        fill_rect(img, x + 5, y + 5, 81, 16, parse_hex(badge)?);
        draw_text(
            img,
            &fonts.regular,
            label,
            x + 8,
            y + 8,
            TextStyle::new(10.0, palette.white),
        );
    }

    let info_y = y + COLOR_BLOCK;
    let info_h = layout.card_height - COLOR_BLOCK + 1;
    fill_rect(img, x, info_y, card_w + 1, info_h, palette.white);
    outline_rect(img, x, info_y, card_w + 1, info_h, palette.border, 2);

    draw_text(
        img,
        &fonts.regular,
        &color.name,
        x + 8,
        info_y + 8,
        TextStyle::new(14.0, palette.heading),
    );
    draw_text(
        img,
        &fonts.regular,
        &color.description,
        x + 8,
        info_y + 28,
        TextStyle::new(10.0, palette.body),
    );
    draw_text(
        img,
        &fonts.mono,
        &color.hex,
        x + 8,
        info_y + 45,
        TextStyle::new(9.0, palette.muted),
    );

    Ok(())
}

/// Render the swatch and write it as an RGB PNG.
///
/// # Errors
///
/// Returns an error if rendering fails or the file cannot be written.
pub fn generate(config: &Config) -> Result<Outcome> {
    let fonts = FontSet::load(&config.fonts, &config.mono_fonts);

    let img = render(&config.colors, &config.layout, &fonts)?;
    let rgb = DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(img).to_rgb8());
    save_png(&rgb, &config.out)?;

    Ok(Outcome::Generated(vec![config.out.clone()]))
}

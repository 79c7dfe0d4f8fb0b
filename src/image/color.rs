//! Hex colour parsing.

use image::Rgba;

use crate::error::{Error, Result};

/// Parse a `#RRGGBB` string into an opaque RGBA pixel.
///
/// # Errors
///
/// Returns `Error::InvalidColor` for anything that is not a `#` followed by
/// exactly six hex digits.
pub fn parse_hex(value: &str) -> Result<Rgba<u8>> {
    let invalid = || Error::InvalidColor {
        value: value.to_string(),
    };

    let digits = value.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, 255]))
}

/// Text and chrome colours shared by the rendered sample images.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Rgba<u8>,
    pub heading: Rgba<u8>,
    pub body: Rgba<u8>,
    pub muted: Rgba<u8>,
    pub border: Rgba<u8>,
    pub panel: Rgba<u8>,
    pub white: Rgba<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba([0xf8, 0xf9, 0xfa, 255]),
            heading: Rgba([0x1f, 0x29, 0x37, 255]),
            body: Rgba([0x6b, 0x72, 0x80, 255]),
            muted: Rgba([0x9c, 0xa3, 0xaf, 255]),
            border: Rgba([0xd1, 0xd5, 0xdb, 255]),
            panel: Rgba([0xf3, 0xf4, 0xf6, 255]),
            white: Rgba([255, 255, 255, 255]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#0F4A3C").unwrap(), Rgba([0x0f, 0x4a, 0x3c, 255]));
        assert_eq!(parse_hex("#1a4b3a").unwrap(), Rgba([0x1a, 0x4b, 0x3a, 255]));
    }

    #[test]
    fn test_parse_hex_rejects_malformed() {
        for bad in ["0F4A3C", "#0F4A3", "#0F4A3C0", "#GG0000", "", "#"] {
            assert!(
                matches!(parse_hex(bad), Err(Error::InvalidColor { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_palette_matches_page_background() {
        assert_eq!(
            Palette::default().background,
            parse_hex("#f8f9fa").unwrap()
        );
    }
}

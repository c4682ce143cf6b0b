//! Palette Resolution - fixed or text-derived color pairs

use image::Rgba;

use crate::hash;

const BLACK: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xFF]);
const WHITE: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);

/// A pair of colors to use in image generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub foreground: Rgba<u8>,
    pub background: Rgba<u8>,
}

impl Palette {
    /// The black-on-white palette used when color derivation is disabled.
    pub const DEFAULT: Palette = Palette { foreground: BLACK, background: WHITE };

    /// Derive a palette from the text: the low 24 bits of the seed become an
    /// opaque RGB foreground (most significant byte first), on white.
    pub fn derive(text: &str) -> Palette {
        let rgb = hash::seed(text) as u32 & 0xFF_FFFF;

        Palette {
            foreground: Rgba([(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 0xFF]),
            background: WHITE,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_is_black_on_white() {
        assert_eq!(Palette::DEFAULT.foreground, Rgba([0x00, 0x00, 0x00, 0xFF]));
        assert_eq!(Palette::DEFAULT.background, Rgba([0xFF, 0xFF, 0xFF, 0xFF]));
        assert_eq!(Palette::default(), Palette::DEFAULT);
    }

    #[test]
    fn derive_is_deterministic() {
        assert_eq!(Palette::derive("pixicon"), Palette::derive("pixicon"));
    }

    #[test]
    fn derive_known_colors() {
        // seed("jackwilsdon") ends ...eae3a4, seed("testing123") ends ...cfc685.
        assert_eq!(
            Palette::derive("jackwilsdon").foreground,
            Rgba([0xEA, 0xE3, 0xA4, 0xFF])
        );
        assert_eq!(
            Palette::derive("testing123").foreground,
            Rgba([0xCF, 0xC6, 0x85, 0xFF])
        );
    }

    #[test]
    fn derive_keeps_a_white_background() {
        for text in ["jackwilsdon", "testing123", ""] {
            assert_eq!(Palette::derive(text).background, WHITE);
        }
    }
}

//! CSS strings for canvas fill styles and fonts.

use crate::constants::GLYPH_FONT_FAMILY;
use nexus_core::{Hsl, Rgba};

#[inline]
pub fn css_rgba(color: Rgba) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        color.red, color.green, color.blue, color.alpha
    )
}

#[inline]
pub fn css_hsl(color: Hsl) -> String {
    format!(
        "hsl({:.1}, {}%, {}%)",
        color.hue, color.saturation, color.lightness
    )
}

#[inline]
pub fn font_spec(px: f32) -> String {
    format!("{:.1}px {}", px, GLYPH_FONT_FAMILY)
}

/// Remembers the last font string so glyph runs at one size format it once.
#[derive(Default)]
pub struct FontCache {
    px: Option<f32>,
    spec: String,
}

impl FontCache {
    pub fn get(&mut self, px: f32) -> &str {
        if self.px != Some(px) {
            self.px = Some(px);
            self.spec = font_spec(px);
        }
        &self.spec
    }
}

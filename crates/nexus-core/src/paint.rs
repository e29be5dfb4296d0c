//! Drawing seam between the frame step and whatever owns the pixels.
//!
//! The browser implements [`Painter`] on a canvas 2D context; tests record
//! the calls. Colours stay as plain values so each backend can format them
//! the way it needs.

use crate::sizing::SurfaceSize;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f32,
}

impl Rgba {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

/// Hue in degrees, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

/// Immediate-mode drawing target for one frame step.
///
/// Implementations must never clear the surface on their own: the trail look
/// comes from `fade` compositing over the previous frame.
pub trait Painter {
    /// Resize the backing surface. Resizing may discard existing pixels.
    fn resize(&mut self, size: SurfaceSize);
    /// Composite `color` over the whole surface.
    fn fade(&mut self, color: Rgba);
    /// Draw one symbol with its baseline at `(x, y)`.
    fn glyph(&mut self, symbol: char, x: f32, y: f32, font_px: f32, color: Hsl, alpha: f32);
    /// Fill a disc centred at `(x, y)`.
    fn dot(&mut self, x: f32, y: f32, radius: f32, color: Hsl, alpha: f32);
}

/// `sin` of `time * rate + offset`, evaluated in `f64`.
#[inline]
pub(crate) fn phase_sin(time: f64, rate: f64, offset: f64) -> f32 {
    (time * rate + offset).sin() as f32
}

#[inline]
pub(crate) fn phase_cos(time: f64, rate: f64, offset: f64) -> f32 {
    (time * rate + offset).cos() as f32
}

#[inline]
pub fn glyph_color(time: f64, index: usize) -> Hsl {
    use crate::constants::{BASE_HUE, GLYPH_HUE_SWING};
    let hue = BASE_HUE + phase_sin(time, 0.5, index as f64 * 0.1) * GLYPH_HUE_SWING;
    Hsl::new(hue, 65.0, 65.0)
}

#[inline]
pub fn particle_color(time: f64, index: usize) -> Hsl {
    use crate::constants::{BASE_HUE, PARTICLE_HUE_SWING};
    let hue = BASE_HUE + phase_sin(time, 0.7, index as f64 * 0.2) * PARTICLE_HUE_SWING;
    Hsl::new(hue, 70.0, 70.0)
}

/// Gentle per-particle twinkle around 90% of the base alpha.
#[inline]
pub fn particle_twinkle(time: f64, index: usize) -> f32 {
    0.9 + phase_sin(time, 0.4, index as f64) * 0.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hues_drift_within_swing() {
        for step in 0..500 {
            let t = step as f64 * 0.016;
            for i in 0..40 {
                let g = glyph_color(t, i).hue;
                let p = particle_color(t, i).hue;
                assert!((220.0..=280.0).contains(&g), "glyph hue {g}");
                assert!((210.0..=290.0).contains(&p), "particle hue {p}");
            }
        }
    }

    #[test]
    fn twinkle_stays_near_unity() {
        for i in 0..100 {
            let k = particle_twinkle(i as f64 * 0.37, i);
            assert!((0.8..=1.0).contains(&k));
        }
    }
}

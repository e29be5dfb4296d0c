use crate::constants::*;
use crate::paint::Rgba;

/// Tunables for field generation, motion and paint alpha.
///
/// The defaults reproduce the production look; tests and embedders override
/// individual fields with struct update syntax.
#[derive(Clone, Debug, PartialEq)]
pub struct NexusConfig {
    pub particle_area_per_unit: f32,
    pub particle_floor: usize,
    pub particle_cap: usize,
    pub target_lanes: f32,
    pub min_lane_spacing: f32,
    pub time_step: f64,
    pub rain_speed: f32,
    pub particle_velocity_span: f32,
    pub particle_drift_amplitude: f32,
    /// `(base, span)`: drawn values are `base + rand * span`.
    pub particle_opacity_range: (f32, f32),
    pub particle_radius_range: (f32, f32),
    pub lane_speed_range: (f32, f32),
    pub glyph_opacity_range: (f32, f32),
    pub glyph_count_min: usize,
    pub glyph_count_span: usize,
    pub rain_opacity: f32,
    pub particle_opacity: f32,
    pub glyph_margin: f32,
    pub trail_fade: Rgba,
    pub desktop_breakpoint_px: f64,
    pub desktop_x_bias: f32,
}

impl Default for NexusConfig {
    fn default() -> Self {
        let [r, g, b, a] = TRAIL_FADE_RGBA;
        Self {
            particle_area_per_unit: PARTICLE_AREA_PER_UNIT,
            particle_floor: PARTICLE_FLOOR,
            particle_cap: PARTICLE_CAP,
            target_lanes: TARGET_LANES,
            min_lane_spacing: MIN_LANE_SPACING,
            time_step: TIME_STEP,
            rain_speed: RAIN_SPEED,
            particle_velocity_span: PARTICLE_VELOCITY_SPAN,
            particle_drift_amplitude: PARTICLE_DRIFT_AMPLITUDE,
            particle_opacity_range: PARTICLE_OPACITY_RANGE,
            particle_radius_range: PARTICLE_RADIUS_RANGE,
            lane_speed_range: LANE_SPEED_RANGE,
            glyph_opacity_range: GLYPH_OPACITY_RANGE,
            glyph_count_min: GLYPH_COUNT_MIN,
            glyph_count_span: GLYPH_COUNT_SPAN,
            rain_opacity: RAIN_OPACITY,
            particle_opacity: PARTICLE_OPACITY,
            glyph_margin: GLYPH_MARGIN,
            trail_fade: Rgba::new(r as u8, g as u8, b as u8, a),
            desktop_breakpoint_px: DESKTOP_BREAKPOINT_PX,
            desktop_x_bias: DESKTOP_X_BIAS,
        }
    }
}

impl NexusConfig {
    /// Horizontal bias applied to particle spawn positions for a viewport.
    #[inline]
    pub fn x_bias_for_viewport(&self, viewport_width: f64) -> f32 {
        if viewport_width > self.desktop_breakpoint_px {
            self.desktop_x_bias.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

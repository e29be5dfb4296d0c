//! Particle and lane generation for one field generation.
//!
//! A [`Field`] is rebuilt from scratch whenever the surface changes size; it
//! is never patched incrementally.

use crate::config::NexusConfig;
use crate::constants::*;
use crate::sizing::SurfaceSize;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

/// Inline capacity covers the default glyph counts; larger configs spill to the heap.
pub type Glyphs = SmallVec<[Glyph; 20]>;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub opacity: f32,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    pub symbol: char,
    pub y: f32,
    pub opacity: f32,
}

/// A fixed-x column of independently falling glyphs.
#[derive(Clone, Debug, PartialEq)]
pub struct Lane {
    pub x: f32,
    pub speed: f32,
    pub glyphs: Glyphs,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub size: SurfaceSize,
    pub font_px: f32,
    pub particles: Vec<Particle>,
    pub lanes: Vec<Lane>,
}

/// Horizontal lane arrangement for a surface width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaneLayout {
    pub spacing: f32,
    pub count: usize,
}

/// Number of particles for a surface: area density, then cap, then floor.
///
/// The floor is applied last so it wins even against a smaller cap.
pub fn particle_count(size: SurfaceSize, config: &NexusConfig) -> usize {
    let by_area = (size.area() / config.particle_area_per_unit).floor() as usize;
    by_area.min(config.particle_cap).max(config.particle_floor)
}

pub fn lane_layout(width: u32, config: &NexusConfig) -> LaneLayout {
    let width = width as f32;
    let spacing = config.min_lane_spacing.max(width / config.target_lanes);
    LaneLayout {
        spacing,
        count: (width / spacing).floor() as usize,
    }
}

#[inline]
pub fn glyph_font_px(width: u32) -> f32 {
    MIN_GLYPH_FONT_PX.max(width as f32 / GLYPH_FONT_DIVISOR)
}

#[inline]
pub(crate) fn draw_range<R: Rng>(rng: &mut R, (base, span): (f32, f32)) -> f32 {
    base + rng.gen::<f32>() * span
}

/// Fresh opacity for a recycled glyph.
#[inline]
pub fn draw_glyph_opacity<R: Rng>(rng: &mut R, config: &NexusConfig) -> f32 {
    draw_range(rng, config.glyph_opacity_range)
}

fn pick_symbol<R: Rng>(rng: &mut R, alphabet: &[char]) -> char {
    alphabet[rng.gen_range(0..alphabet.len())]
}

impl Field {
    /// A field with nothing in it, used until the first real bounds arrive.
    pub fn empty(size: SurfaceSize) -> Self {
        Self {
            size,
            font_px: glyph_font_px(size.width),
            particles: Vec::new(),
            lanes: Vec::new(),
        }
    }

    /// Generate a complete field for `size`.
    ///
    /// `viewport_width` is the CSS width of the whole page; wide viewports
    /// push particle spawns to the right, away from the hero copy.
    pub fn build<R: Rng>(
        size: SurfaceSize,
        viewport_width: f64,
        config: &NexusConfig,
        rng: &mut R,
    ) -> Self {
        let width = size.width_f32();
        let height = size.height_f32();

        let bias = config.x_bias_for_viewport(viewport_width);
        let particles = (0..particle_count(size, config))
            .map(|_| {
                let x = rng.gen::<f32>() * (width * (1.0 - bias)) + width * bias;
                let y = rng.gen::<f32>() * height;
                Particle {
                    position: Vec2::new(wrap(x, width), wrap(y, height)),
                    velocity: Vec2::new(
                        (rng.gen::<f32>() - 0.5) * config.particle_velocity_span,
                        (rng.gen::<f32>() - 0.5) * config.particle_velocity_span,
                    ),
                    opacity: draw_range(rng, config.particle_opacity_range),
                    radius: draw_range(rng, config.particle_radius_range),
                }
            })
            .collect();

        let alphabet: Vec<char> = GLYPH_ALPHABET.chars().collect();
        let layout = lane_layout(size.width, config);
        let lanes = (0..layout.count)
            .map(|i| {
                let count = rng.gen_range(0..config.glyph_count_span.max(1)) + config.glyph_count_min;
                let speed = draw_range(rng, config.lane_speed_range) * config.rain_speed;
                // Stagger starts over the full height, partly above the top
                // edge, so the rain is already flowing on the first frame.
                let glyphs = (0..count)
                    .map(|index| Glyph {
                        symbol: pick_symbol(rng, &alphabet),
                        y: (index as f32 / count as f32) * height - rng.gen::<f32>() * height,
                        opacity: draw_glyph_opacity(rng, config),
                    })
                    .collect();
                Lane {
                    x: i as f32 * layout.spacing + layout.spacing / 2.0,
                    speed,
                    glyphs,
                }
            })
            .collect();

        Self {
            size,
            font_px: glyph_font_px(size.width),
            particles,
            lanes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty() && self.lanes.is_empty()
    }

    pub fn glyph_count(&self) -> usize {
        self.lanes.iter().map(|l| l.glyphs.len()).sum()
    }
}

/// Wrap `v` into `[0, extent)` on a torus.
#[inline]
pub fn wrap(v: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }
    let r = v.rem_euclid(extent);
    // rem_euclid rounds tiny negatives up to `extent`
    if r >= extent {
        0.0
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn wrap_is_half_open() {
        assert_eq!(wrap(800.0, 800.0), 0.0);
        assert_eq!(wrap(-1.0, 800.0), 799.0);
        assert_eq!(wrap(805.5, 800.0), 5.5);
        assert!(wrap(-1e-9, 800.0) < 800.0);
        assert_eq!(wrap(3.0, 0.0), 0.0);
    }

    #[test]
    fn glyph_counts_stay_inline() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = Field::build(
            SurfaceSize::new(1920, 1080),
            1920.0,
            &NexusConfig::default(),
            &mut rng,
        );
        for lane in &field.lanes {
            assert!(!lane.glyphs.spilled());
            assert!((GLYPH_COUNT_MIN..GLYPH_COUNT_MIN + GLYPH_COUNT_SPAN).contains(&lane.glyphs.len()));
        }
    }

    #[test]
    fn font_has_floor() {
        assert_eq!(glyph_font_px(300), 10.0);
        assert_eq!(glyph_font_px(2400), 20.0);
    }
}

// Shared tuning constants for the hero background. `NexusConfig::default()`
// is built from these so the browser and host tests agree on one set.

// Particle density
pub const PARTICLE_AREA_PER_UNIT: f32 = 15_000.0; // px² of surface per particle
pub const PARTICLE_FLOOR: usize = 30;
pub const PARTICLE_CAP: usize = 75;

// Lane layout
pub const TARGET_LANES: f32 = 85.0;
pub const MIN_LANE_SPACING: f32 = 20.0; // px

// Motion
pub const TIME_STEP: f64 = 0.016; // nominal seconds per frame, not wall clock
pub const RAIN_SPEED: f32 = 0.8;
pub const GLYPH_MARGIN: f32 = 30.0; // px above/below the surface before recycling
pub const PARTICLE_VELOCITY_SPAN: f32 = 0.12;
pub const PARTICLE_DRIFT_AMPLITUDE: f32 = 0.06;

// Per-entity randomized ranges, as (base, span): value = base + rand * span
pub const PARTICLE_OPACITY_RANGE: (f32, f32) = (0.15, 0.25);
pub const PARTICLE_RADIUS_RANGE: (f32, f32) = (1.0, 2.0);
pub const LANE_SPEED_RANGE: (f32, f32) = (0.3, 0.6);
pub const GLYPH_OPACITY_RANGE: (f32, f32) = (0.2, 0.3);
pub const GLYPH_COUNT_MIN: usize = 8;
pub const GLYPH_COUNT_SPAN: usize = 12;

// Paint
pub const RAIN_OPACITY: f32 = 0.4;
pub const PARTICLE_OPACITY: f32 = 0.32;
pub const TRAIL_FADE_RGBA: [f32; 4] = [11.0, 19.0, 38.0, 0.08];
pub const BASE_HUE: f32 = 250.0;
pub const GLYPH_HUE_SWING: f32 = 30.0;
pub const PARTICLE_HUE_SWING: f32 = 40.0;
pub const MIN_GLYPH_FONT_PX: f32 = 10.0;
pub const GLYPH_FONT_DIVISOR: f32 = 120.0; // font px = width / divisor

// Layout bias: on wide viewports keep particles off the left third
pub const DESKTOP_BREAKPOINT_PX: f64 = 1024.0;
pub const DESKTOP_X_BIAS: f32 = 0.3;

pub const GLYPH_ALPHABET: &str = "01ABCDEF◊∑∆√∫μπΩ≈≠≤≥⊂⊃∩∪∈∉∀∃λφψχω";

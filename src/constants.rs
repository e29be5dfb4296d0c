// DOM-side constants for mounting the background. Tuning of the effect
// itself lives in `nexus_core::constants`.

// Ancestor whose box the canvas is sized to
pub const HERO_SELECTOR: &str = ".hero";

// Capability checks
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const RESIZE_OBSERVER_GLOBAL: &str = "ResizeObserver";

// Canvas
pub const CONTEXT_2D: &str = "2d";
pub const GLYPH_FONT_FAMILY: &str = "monospace";

// Events
pub const WINDOW_RESIZE_EVENT: &str = "resize";
pub const VISIBILITY_CHANGE_EVENT: &str = "visibilitychange";

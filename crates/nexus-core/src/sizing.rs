/// Fractional CSS-pixel box of the host container, as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Integer pixel size of the drawing surface. Never smaller than 1×1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Round a container box to whole pixels, clamping to at least 1×1.
    /// Non-finite or negative extents collapse to 1.
    pub fn from_bounds(bounds: Bounds) -> Self {
        Self::new(round_extent(bounds.width), round_extent(bounds.height))
    }

    #[inline]
    pub fn area(self) -> f32 {
        self.width as f32 * self.height as f32
    }

    #[inline]
    pub fn width_f32(self) -> f32 {
        self.width as f32
    }

    #[inline]
    pub fn height_f32(self) -> f32 {
        self.height as f32
    }
}

#[inline]
fn round_extent(v: f64) -> u32 {
    if !v.is_finite() || v < 1.0 {
        return 1;
    }
    v.round().min(u32::MAX as f64) as u32
}

use thiserror::Error;

/// Failures the host environment can report. None of them cross the
/// renderer boundary: each one either disables the effect or degrades it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RendererError {
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
    #[error("resize observation unavailable: {0}")]
    ObserverUnavailable(String),
}

/// Why a handle never started animating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisableReason {
    /// The user asked for reduced motion; this is an opt-out, not a fault.
    ReducedMotion,
    SurfaceUnavailable,
}
